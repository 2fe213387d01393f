//! # monomap - Map the Structure of JavaScript Monorepos
//!
//! monomap inspects a pnpm or npm-workspaces monorepo and documents it: a
//! folder tree of every workspace project and a Mermaid diagram of the
//! dependencies between top-level folders, assembled into one Markdown file.
//!
//! ## Main Components
//!
//! - **Analyzer**: Discovers workspace packages and normalizes them into
//!   [`core::Project`] records
//! - **Tree**: Folds project paths into a folder tree and renders it as
//!   text-art
//! - **Graph**: Groups projects by top-level folder and connects the groups
//!   through their dependencies
//! - **Reports**: Assembles the Markdown (or JSON) document
//! - **Summarizer**: Writes the overview paragraph, locally or through an
//!   OpenAI-compatible model
//!
//! ## Usage
//!
//! ### Example: Mapping a Monorepo on Disk
//!
//! ```no_run
//! use std::path::Path;
//!
//! use monomap::analyzer::WorkspaceAnalyzer;
//! use monomap::cli::GraphDirection;
//! use monomap::reports::{MarkdownReportGenerator, ReportGenerator, WorkspaceSnapshot};
//! use monomap::workspace_discovery::DiscoveryMethod;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Discover every workspace project from package.json manifests
//! let mut analyzer = WorkspaceAnalyzer::new();
//! analyzer.discover_projects(
//!     Path::new("/path/to/your/monorepo"),
//!     &DiscoveryMethod::Manifests,
//!     &[],
//!     None,
//! )?;
//!
//! // Step 2: Build the folder tree and the dependency graph
//! let snapshot = WorkspaceSnapshot::build(
//!     analyzer.projects().to_vec(),
//!     GraphDirection::TopDown,
//!     false, // include devDependencies
//! )?;
//!
//! // Step 3: Assemble the document
//! let document = MarkdownReportGenerator::new("Repository Structure", "")
//!     .generate_report(&snapshot)?;
//! std::fs::write("ARCHITECTURE.md", document).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Rendering In-Memory Projects
//!
//! ```
//! use monomap::core::Project;
//! use monomap::graph::{DependencyGraphBuilder, GraphRenderer};
//! use monomap::tree::{PathTreeBuilder, TreeRenderer};
//!
//! # fn main() -> Result<(), monomap::error::MonomapError> {
//! let projects = vec![
//!     Project::new("@x/core", "packages/core", vec![], vec![], 0)?,
//!     Project::new("@x/api", "services/api", vec!["@x/core".into()], vec![], 1)?,
//! ];
//!
//! let forest = PathTreeBuilder::new().build(&projects)?;
//! let tree = TreeRenderer::new().render(&forest)?;
//! assert!(tree.contains("└── api (@x/api)"));
//!
//! let graph = DependencyGraphBuilder::default().build(&projects);
//! let mermaid = GraphRenderer::default().mermaid_string(&graph)?;
//! assert!(mermaid.ends_with("    services --> packages\n"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod dependency_filter;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest_parser;
pub mod reports;
pub mod summarizer;
pub mod tree;
pub mod workspace_discovery;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
