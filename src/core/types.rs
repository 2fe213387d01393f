//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

use crate::error::MonomapError;

/// A workspace project in canonical form
///
/// Paths are POSIX-style and relative to the repository root; the empty path
/// is the root project itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    name: String,
    namespace_prefix: String,
    path: String,
    dependencies: Vec<String>,
    dev_dependencies: Vec<String>,
    sequence: usize,
}

impl Project {
    /// Create a project record, rejecting empty names
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        dependencies: Vec<String>,
        dev_dependencies: Vec<String>,
        sequence: usize,
    ) -> Result<Self, MonomapError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MonomapError::malformed(format!(
                "record #{sequence} has an empty name"
            )));
        }

        let namespace_prefix = namespace_prefix(&name).to_string();
        Ok(Self {
            name,
            namespace_prefix,
            path: path.into(),
            dependencies,
            dev_dependencies,
            sequence,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace_prefix(&self) -> &str {
        &self.namespace_prefix
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &[String] {
        &self.dev_dependencies
    }

    /// Position of this project in discovery order
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Path segments in order; empty for the root project
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|_| !self.is_root())
    }

    /// The top-level folder this project lives under
    pub fn first_segment(&self) -> Option<&str> {
        self.segments().next()
    }

    /// Regular dependencies followed by dev dependencies
    pub fn all_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .chain(self.dev_dependencies.iter())
            .map(String::as_str)
    }

    /// Whether `dependency` shares this project's namespace (`@scope/...`)
    pub fn shares_namespace_with(&self, dependency: &str) -> bool {
        namespace_prefix(dependency) == self.namespace_prefix
    }
}

/// Portion of a package name before the first `/`, or the whole name
pub fn namespace_prefix(name: &str) -> &str {
    name.split_once('/').map_or(name, |(prefix, _)| prefix)
}
