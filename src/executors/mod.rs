//! Command executors that handle the actual logic for each command

pub mod generate;
pub mod graph;
pub mod tree;

use std::path::Path;

use miette::{Result, WrapErr};

use crate::analyzer::WorkspaceAnalyzer;
use crate::progress::ProgressReporter;
use crate::workspace_discovery::DiscoveryMethod;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Discover every workspace project under `root`
fn discover(
    root: &Path,
    method: &DiscoveryMethod,
    ignore: &[String],
    progress: Option<&mut ProgressReporter>,
) -> Result<WorkspaceAnalyzer> {
    let mut analyzer = WorkspaceAnalyzer::new();
    analyzer
        .discover_projects(root, method, ignore, progress)
        .wrap_err("Failed to discover workspace projects")?;
    Ok(analyzer)
}
