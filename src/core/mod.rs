//! Core data types and structures
//!
//! This module contains the canonical workspace project record consumed by the
//! tree and graph pipelines, separated from discovery and rendering logic.

pub mod types;

pub use types::*;
