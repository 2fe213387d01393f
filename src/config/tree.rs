//! Tree command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::MonomapError;
use crate::workspace_discovery::DiscoveryMethod;

#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub root: PathBuf,
    pub method: DiscoveryMethod,
    pub ignore: Vec<String>,
    pub fenced: bool,
}

impl TreeOptions {
    pub fn builder() -> TreeOptionsBuilder {
        TreeOptionsBuilder::default()
    }
}

#[derive(Default)]
pub struct TreeOptionsBuilder {
    root: Option<PathBuf>,
    method: Option<DiscoveryMethod>,
    ignore: Option<Vec<String>>,
    fenced: Option<bool>,
}

impl TreeOptionsBuilder {
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

    pub fn with_fenced(mut self, fenced: bool) -> Self {
        self.fenced = Some(fenced);
        self
    }
}

impl crate::common::ConfigBuilder for TreeOptionsBuilder {
    type Config = TreeOptions;

    fn build(self) -> Result<Self::Config, MonomapError> {
        Ok(TreeOptions {
            root: self.root.ok_or_else(|| missing_field("root"))?,
            method: self.method.ok_or_else(|| missing_field("method"))?,
            ignore: self.ignore.unwrap_or_default(),
            fenced: self.fenced.unwrap_or(false),
        })
    }
}
