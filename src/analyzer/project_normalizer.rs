//! Normalization of raw package records
//!
//! Turns whatever the package manager reported into canonical [`Project`]
//! records: dependency maps reduced to names, paths made relative to the
//! repository root with `/` separators.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::core::Project;
use crate::error::MonomapError;
use crate::manifest_parser::RawPackage;

#[derive(Debug)]
pub struct ProjectNormalizer {
    root: PathBuf,
}

impl ProjectNormalizer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// A normalizer for a recorded package list
    ///
    /// Recorded absolute paths may come from another machine. The root is the
    /// recorded package that contains every other one; failing that, the
    /// local `root` when every path lives below it.
    pub fn recorded(packages: &[RawPackage], root: &Path) -> Result<Self, MonomapError> {
        let paths: Vec<PathBuf> = packages
            .iter()
            .filter_map(|p| p.path.as_deref())
            .map(forward_slashes)
            .filter(|p| p.is_absolute())
            .collect();

        if paths.is_empty() {
            return Ok(Self::new(root));
        }

        if paths.len() > 1
            && let Some(container) = paths
                .iter()
                .find(|candidate| paths.iter().all(|p| p.starts_with(candidate)))
        {
            return Ok(Self::new(container.clone()));
        }

        if paths.iter().all(|p| p.starts_with(root)) {
            return Ok(Self::new(root));
        }

        Err(MonomapError::malformed(format!(
            "recorded paths have no workspace root package and do not live under '{}'; \
             pass --root with the directory the list was recorded in",
            root.display()
        )))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Normalize every package, failing on the first malformed record
    pub fn normalize(&self, packages: &[RawPackage]) -> Result<Vec<Project>, MonomapError> {
        let mut seen_names = HashSet::new();
        let mut root_project: Option<String> = None;
        let mut projects = Vec::with_capacity(packages.len());

        for (sequence, package) in packages.iter().enumerate() {
            let name = package.name.clone().unwrap_or_default();
            let path = self.relative_path(sequence, &name, package.path.as_deref())?;
            let project = Project::new(
                name,
                path,
                package.dependency_names(),
                package.dev_dependency_names(),
                sequence,
            )?;

            if !seen_names.insert(project.name().to_string()) {
                return Err(MonomapError::malformed(format!(
                    "project name '{}' appears more than once",
                    project.name()
                )));
            }

            if project.is_root() {
                if let Some(existing) = &root_project {
                    return Err(MonomapError::malformed(format!(
                        "both '{existing}' and '{}' live at the repository root",
                        project.name()
                    )));
                }
                root_project = Some(project.name().to_string());
            }

            projects.push(project);
        }

        Ok(projects)
    }

    fn relative_path(
        &self,
        sequence: usize,
        name: &str,
        path: Option<&Path>,
    ) -> Result<String, MonomapError> {
        let Some(path) = path else {
            return Err(MonomapError::malformed(format!(
                "record #{sequence} ('{name}') has no path"
            )));
        };

        let path = forward_slashes(path);

        let relative = if path.is_absolute() {
            path.strip_prefix(&self.root).map_err(|_| {
                MonomapError::malformed(format!(
                    "'{name}' at '{}' is outside the repository root '{}'",
                    path.display(),
                    self.root.display()
                ))
            })?
        } else {
            path.as_path()
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_string_lossy().to_string()),
                Component::CurDir => {}
                _ => {
                    return Err(MonomapError::malformed(format!(
                        "'{name}' has an unsupported path '{}'",
                        relative.display()
                    )));
                }
            }
        }

        Ok(segments.join("/"))
    }
}

// Recorded lists may come from Windows machines
fn forward_slashes(path: &Path) -> PathBuf {
    PathBuf::from(path.to_string_lossy().replace('\\', "/"))
}
