//! Report generation modules for different output formats
//!
//! This module contains report generators for the structure document:
//! - markdown: The Markdown document with tree, Mermaid graph and project table
//! - json: JSON format for programmatic use

pub mod json;
pub mod markdown;
mod snapshot;

use crate::error::MonomapError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a built workspace snapshot
    fn generate_report(&self, snapshot: &WorkspaceSnapshot) -> Result<String, MonomapError>;
}

// Re-export for convenience
pub use json::JsonReportGenerator;
pub use markdown::MarkdownReportGenerator;
pub use snapshot::WorkspaceSnapshot;
