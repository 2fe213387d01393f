//! Common functionality shared across commands

use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{GraphDirection, SourceKind};
use crate::config::MonomapToml;
use crate::error::MonomapError;
use crate::workspace_discovery::DiscoveryMethod;

/// Common arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Repository root (defaults to current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Where to discover workspace projects from
    #[arg(long, value_enum, env = "MONOMAP_SOURCE")]
    pub source: Option<SourceKind>,

    /// Read a recorded `pnpm list --recursive --json` file instead of running pnpm
    #[arg(long, value_name = "FILE", env = "MONOMAP_FROM_JSON")]
    pub from_json: Option<PathBuf>,

    /// Glob patterns of project paths to leave out (comma separated)
    #[arg(long, value_name = "GLOB", value_delimiter = ',', env = "MONOMAP_IGNORE")]
    pub ignore: Vec<String>,

    /// Configuration file (defaults to monomap.toml in the repository root)
    #[arg(long, value_name = "FILE", env = "MONOMAP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments that shape the dependency graph
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Exclude devDependencies from the graph
    #[arg(long, env = "MONOMAP_EXCLUDE_DEV")]
    pub exclude_dev: bool,

    /// Mermaid layout direction
    #[arg(long, value_enum, env = "MONOMAP_DIRECTION")]
    pub direction: Option<GraphDirection>,
}

impl CommonArgs {
    /// Get the repository root as an absolute path, using the current
    /// directory if none was provided
    pub fn get_root(&self) -> Result<PathBuf, MonomapError> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        std::fs::canonicalize(&root).map_err(|e| MonomapError::ConfigurationError {
            message: format!("Repository root '{}' is not accessible: {e}", root.display()),
        })
    }

    /// Load `monomap.toml`, either the one named by `--config` or the one in
    /// `root` if present
    pub fn load_config(&self, root: &Path) -> Result<MonomapToml, MonomapError> {
        match &self.config {
            Some(path) => MonomapToml::load(path),
            None => MonomapToml::load_optional(root),
        }
    }

    /// Resolve the discovery source: flags first, then the config file,
    /// then pnpm
    pub fn discovery_method(&self, file: &MonomapToml) -> Result<DiscoveryMethod, MonomapError> {
        if let Some(path) = &self.from_json {
            return Ok(DiscoveryMethod::Recorded(path.clone()));
        }

        match self.source.or(file.discovery.source) {
            None | Some(SourceKind::Pnpm) => Ok(DiscoveryMethod::Pnpm),
            Some(SourceKind::Manifests) => Ok(DiscoveryMethod::Manifests),
            Some(SourceKind::Json) => Err(MonomapError::ConfigurationError {
                message: "The json source needs a recorded file; pass --from-json <FILE>"
                    .to_string(),
            }),
        }
    }

    /// Ignore patterns from the flags followed by those from the config file
    pub fn ignore_patterns(&self, file: &MonomapToml) -> Vec<String> {
        self.ignore
            .iter()
            .chain(&file.discovery.ignore)
            .cloned()
            .collect()
    }
}

impl GraphArgs {
    pub fn exclude_dev(&self, file: &MonomapToml) -> bool {
        self.exclude_dev || file.graph.exclude_dev.unwrap_or(false)
    }

    pub fn direction(&self, file: &MonomapToml) -> GraphDirection {
        self.direction
            .or(file.graph.direction)
            .unwrap_or_default()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, MonomapError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, MonomapError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::MonomapError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> MonomapError {
    MonomapError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
