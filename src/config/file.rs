//! `monomap.toml` loading

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::cli::{GraphDirection, SourceKind};
use crate::constants::output::CONFIG_FILE;
use crate::error::{MonomapError, TomlParseError};
use crate::manifest_parser::read_file;

/// Settings read from `monomap.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonomapToml {
    pub document: DocumentSection,
    pub discovery: DiscoverySection,
    pub graph: GraphSection,
    pub ai: AiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentSection {
    pub title: Option<String>,
    /// Relative paths are resolved against the repository root
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoverySection {
    pub source: Option<SourceKind>,
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphSection {
    pub direction: Option<GraphDirection>,
    pub exclude_dev: Option<bool>,
}

/// The API key comes from `OPENAI_API_KEY`, never from this file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AiSection {
    pub enabled: Option<bool>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

impl MonomapToml {
    /// Load an explicitly named config file; it must exist
    pub fn load(path: &Path) -> Result<Self, MonomapError> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load `monomap.toml` from `root`, or the defaults if there is none
    pub fn load_optional(root: &Path) -> Result<Self, MonomapError> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str, origin: &str) -> Result<Self, MonomapError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|range| SourceSpan::new(range.start.into(), range.len()));

            MonomapError::TomlParseError(Box::new(TomlParseError {
                file: origin.to_string(),
                source_code: NamedSource::new(origin, content.to_string()),
                span,
                source: e,
            }))
        })
    }
}
