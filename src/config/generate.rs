//! Generate command configuration

use std::path::PathBuf;

use crate::cli::{GraphDirection, ReportFormat};
use crate::common::missing_field;
use crate::error::MonomapError;
use crate::workspace_discovery::DiscoveryMethod;

/// Remote summarizer settings, present only when `--ai` is active
#[derive(Debug, Clone, PartialEq)]
pub struct AiSettings {
    pub model: String,
    pub endpoint: String,
}

/// Where the finished document goes
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub root: PathBuf,
    pub method: DiscoveryMethod,
    pub ignore: Vec<String>,
    pub title: String,
    pub format: ReportFormat,
    pub direction: GraphDirection,
    pub exclude_dev: bool,
    pub output: OutputTarget,
    pub force: bool,
    pub ai: Option<AiSettings>,
}

impl GenerateConfig {
    pub fn builder() -> GenerateConfigBuilder {
        GenerateConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct GenerateConfigBuilder {
    root: Option<PathBuf>,
    method: Option<DiscoveryMethod>,
    ignore: Option<Vec<String>>,
    title: Option<String>,
    format: Option<ReportFormat>,
    direction: Option<GraphDirection>,
    exclude_dev: Option<bool>,
    output: Option<OutputTarget>,
    force: Option<bool>,
    ai: Option<Option<AiSettings>>,
}

impl GenerateConfigBuilder {
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_method(mut self, method: DiscoveryMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = Some(ignore);
        self
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_direction(mut self, direction: GraphDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_exclude_dev(mut self, exclude_dev: bool) -> Self {
        self.exclude_dev = Some(exclude_dev);
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    pub fn with_ai(mut self, ai: Option<AiSettings>) -> Self {
        self.ai = Some(ai);
        self
    }
}

impl crate::common::ConfigBuilder for GenerateConfigBuilder {
    type Config = GenerateConfig;

    fn build(self) -> Result<Self::Config, MonomapError> {
        let title = self.title.ok_or_else(|| missing_field("title"))?;
        if title.trim().is_empty() {
            return Err(MonomapError::ConfigurationError {
                message: "Document title must not be empty".to_string(),
            });
        }

        Ok(GenerateConfig {
            root: self.root.ok_or_else(|| missing_field("root"))?,
            method: self.method.ok_or_else(|| missing_field("method"))?,
            ignore: self.ignore.unwrap_or_default(),
            title,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            direction: self.direction.unwrap_or_default(),
            exclude_dev: self.exclude_dev.unwrap_or(false),
            output: self.output.ok_or_else(|| missing_field("output"))?,
            force: self.force.unwrap_or(false),
            ai: self.ai.unwrap_or(None),
        })
    }
}
