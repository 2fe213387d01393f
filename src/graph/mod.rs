//! # Dependency Graph Module
//!
//! This module groups workspace projects into subgraphs (one per top-level
//! folder), connects subgraphs through the dependencies their members declare,
//! and renders the result as Mermaid.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Groups projects and resolves dependency names
//! - **SubgraphNode**: All projects under one top-level folder
//! - **SubgraphEdge**: A deduplicated folder-to-folder dependency
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Mermaid flowchart and ASCII listing
//! - **sanitize_identifier**: Mermaid-safe node identifiers
//!
//! ## Example
//!
//! ```
//! use monomap::core::Project;
//! use monomap::graph::{DependencyGraphBuilder, GraphRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let projects = vec![
//!     Project::new("@x/core", "packages/core", vec![], vec![], 0)?,
//!     Project::new(
//!         "@x/api",
//!         "services/api",
//!         vec!["@x/core".into(), "left-pad".into()],
//!         vec![],
//!         1,
//!     )?,
//! ];
//!
//! let graph = DependencyGraphBuilder::default().build(&projects);
//! let mermaid = GraphRenderer::default().mermaid_string(&graph)?;
//!
//! assert!(mermaid.starts_with("graph TD"));
//! assert!(mermaid.contains("services --> packages"));
//! assert!(!mermaid.contains("left_pad"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::DependencyGraphBuilder;
pub use renderer::{GraphRenderer, sanitize_identifier};
pub use types::{ProjectLink, SubgraphEdge, SubgraphNode, WorkspaceGraph};
