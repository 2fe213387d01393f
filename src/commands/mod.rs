//! Command implementations for the monomap CLI
//!
//! This module contains the implementations for each CLI command:
//! - generate: Write the Markdown structure document
//! - tree: Print the folder tree of workspace projects
//! - graph: Print the dependency graph between top-level folders

pub mod generate;
pub mod graph;
pub mod tree;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Generate { .. } => generate::execute_generate_command(command),
        Commands::Tree { .. } => tree::execute_tree_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
    }
}
