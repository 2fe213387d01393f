//! # Workspace Analysis Module
//!
//! This module discovers the projects of a monorepo and turns them into the
//! canonical [`Project`](crate::core::Project) records used by the tree and
//! graph pipelines.
//!
//! ## Key Components
//!
//! - **WorkspaceAnalyzer**: runs discovery and normalization, and answers
//!   name lookups afterwards
//! - **ProjectNormalizer**: reduces raw package records to projects with
//!   root-relative paths
//!
//! ## Example
//!
//! ```
//! use monomap::analyzer::WorkspaceAnalyzer;
//! use monomap::core::Project;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = WorkspaceAnalyzer::from_projects(vec![
//!     Project::new("@x/core", "packages/core", vec![], vec![], 0)?,
//!     Project::new("@x/api", "services/api", vec!["@x/core".into()], vec![], 1)?,
//! ])?;
//!
//! assert_eq!(analyzer.projects().len(), 2);
//! assert!(analyzer.root_project().is_none());
//! assert_eq!(analyzer.project("@x/core").map(|p| p.path()), Some("packages/core"));
//! # Ok(())
//! # }
//! ```

mod project_normalizer;

pub use project_normalizer::ProjectNormalizer;

mod analyzer_impl;
pub use analyzer_impl::*;
