use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{JsonParseError, MonomapError, offset_of};

/// A package as reported by the package manager or read from `package.json`
///
/// Dependency maps keep their document order; their values (version ranges,
/// resolved metadata) are carried but never interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPackage {
    pub name: Option<String>,
    pub path: Option<PathBuf>,
    pub dependencies: Option<Map<String, Value>>,
    pub dev_dependencies: Option<Map<String, Value>>,
    pub workspaces: Option<WorkspacesField>,
}

/// The `workspaces` field of a root `package.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WorkspacesField {
    Globs(Vec<String>),
    Detailed { packages: Vec<String> },
}

impl RawPackage {
    pub fn dependency_names(&self) -> Vec<String> {
        Self::keys(self.dependencies.as_ref())
    }

    pub fn dev_dependency_names(&self) -> Vec<String> {
        Self::keys(self.dev_dependencies.as_ref())
    }

    /// Member globs declared by a root manifest, if any
    pub fn workspace_globs(&self) -> Vec<String> {
        match &self.workspaces {
            Some(WorkspacesField::Globs(globs)) => globs.clone(),
            Some(WorkspacesField::Detailed { packages }) => packages.clone(),
            None => Vec::new(),
        }
    }

    fn keys(map: Option<&Map<String, Value>>) -> Vec<String> {
        map.map(|m| m.keys().cloned().collect()).unwrap_or_default()
    }
}

/// Parse the output of `pnpm list --recursive --json`
pub fn parse_package_list(content: &str, origin: &str) -> Result<Vec<RawPackage>, MonomapError> {
    parse_json(content, origin)
}

/// Read and parse a single `package.json`
pub fn parse_package_json(path: &Path) -> Result<RawPackage, MonomapError> {
    let content = read_file(path)?;
    parse_json(&content, &path.display().to_string())
}

/// Read and parse a recorded package list from disk
pub fn parse_package_list_file(path: &Path) -> Result<Vec<RawPackage>, MonomapError> {
    let content = read_file(path)?;
    parse_package_list(&content, &path.display().to_string())
}

pub(crate) fn read_file(path: &Path) -> Result<String, MonomapError> {
    std::fs::read_to_string(path).map_err(|e| MonomapError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_json<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T, MonomapError> {
    serde_json::from_str(content).map_err(|e| {
        let span = (e.line() > 0).then(|| {
            let offset = offset_of(content, e.line(), e.column());
            SourceSpan::new(offset.into(), usize::from(offset < content.len()))
        });

        MonomapError::JsonParseError(Box::new(JsonParseError {
            file: origin.to_string(),
            source_code: NamedSource::new(origin, content.to_string()),
            span,
            source: e,
        }))
    })
}
