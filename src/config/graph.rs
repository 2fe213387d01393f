//! Graph command configuration

use std::path::PathBuf;

use crate::cli::{GraphDirection, GraphFormat};
use crate::common::missing_field;
use crate::error::MonomapError;
use crate::workspace_discovery::DiscoveryMethod;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub root: PathBuf,
    pub method: DiscoveryMethod,
    pub ignore: Vec<String>,
    pub format: GraphFormat,
    pub direction: GraphDirection,
    pub output: Option<PathBuf>,
    pub show_links: bool,
    pub exclude_dev: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    root: Option<PathBuf>,
    method: Option<DiscoveryMethod>,
    ignore: Option<Vec<String>>,
    format: Option<GraphFormat>,
    direction: Option<GraphDirection>,
    output: Option<Option<PathBuf>>,
    show_links: Option<bool>,
    exclude_dev: Option<bool>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

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

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_direction(mut self, direction: GraphDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_show_links(mut self, show_links: bool) -> Self {
        self.show_links = Some(show_links);
        self
    }

    pub fn with_exclude_dev(mut self, exclude_dev: bool) -> Self {
        self.exclude_dev = Some(exclude_dev);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, MonomapError> {
        Ok(GraphOptions {
            root: self.root.ok_or_else(|| missing_field("root"))?,
            method: self.method.ok_or_else(|| missing_field("method"))?,
            ignore: self.ignore.unwrap_or_default(),
            format: self.format.ok_or_else(|| missing_field("format"))?,
            direction: self.direction.unwrap_or_default(),
            output: self.output.ok_or_else(|| missing_field("output"))?,
            show_links: self.show_links.unwrap_or(false),
            exclude_dev: self.exclude_dev.unwrap_or(false),
        })
    }
}
