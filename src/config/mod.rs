//! # Configuration Module
//!
//! Configuration structures for all monomap commands. Values are layered from
//! built-in constants, `monomap.toml`, `MONOMAP_*` environment variables and
//! command-line flags, then assembled through a builder per command.
//!
//! ## Command Configurations
//!
//! - **GenerateConfig**: Configuration for the `generate` command that writes
//!   the structure document
//! - **TreeOptions**: Configuration for the `tree` command
//! - **GraphOptions**: Configuration for the `graph` command
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use monomap::cli::{GraphDirection, GraphFormat};
//! use monomap::common::ConfigBuilder;
//! use monomap::config::GraphOptions;
//! use monomap::workspace_discovery::DiscoveryMethod;
//!
//! let options = GraphOptions::builder()
//!     .with_root(PathBuf::from("."))
//!     .with_method(DiscoveryMethod::Manifests)
//!     .with_format(GraphFormat::Mermaid)
//!     .with_direction(GraphDirection::LeftRight)
//!     .with_output(None)
//!     .build()
//!     .unwrap();
//!
//! assert!(!options.exclude_dev);
//! ```

pub mod file;
pub mod generate;
pub mod graph;
pub mod tree;

pub use file::MonomapToml;
pub use generate::{AiSettings, GenerateConfig, OutputTarget};
pub use graph::GraphOptions;
pub use tree::TreeOptions;
