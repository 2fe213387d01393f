use std::collections::HashMap;
use std::path::{Path, PathBuf};

use miette::{Result, WrapErr};

use super::ProjectNormalizer;
use crate::core::Project;
use crate::error::MonomapError;
use crate::progress::ProgressReporter;
use crate::workspace_discovery::{DiscoveryMethod, WorkspaceDiscovery};

#[derive(Debug, Clone, Default)]
pub struct WorkspaceAnalyzer {
    root: PathBuf,
    projects: Vec<Project>,
    name_to_index: HashMap<String, usize>,
}

impl WorkspaceAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an analyzer over already-normalized projects
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, MonomapError> {
        let mut analyzer = Self::new();
        analyzer.set_projects(projects)?;
        Ok(analyzer)
    }

    /// Discover and normalize every project under `root`
    pub fn discover_projects(
        &mut self,
        root: &Path,
        method: &DiscoveryMethod,
        ignore: &[String],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress.as_deref_mut() {
            p.start_discovery(method.label());
        }

        let discovery = WorkspaceDiscovery::new(ignore)?;
        let packages = discovery
            .discover(root, method, progress.as_deref())
            .wrap_err_with(|| format!("Failed to discover projects in '{}'", root.display()))?;

        let (normalizer, packages) = match method {
            DiscoveryMethod::Recorded(file) => {
                let normalizer = ProjectNormalizer::recorded(&packages, root).wrap_err_with(|| {
                    format!("Cannot place '{}' in a repository root", file.display())
                })?;
                let packages = discovery.without_ignored(normalizer.root(), packages);
                (normalizer, packages)
            }
            DiscoveryMethod::Pnpm | DiscoveryMethod::Manifests => {
                (ProjectNormalizer::new(root), packages)
            }
        };

        let projects = normalizer
            .normalize(&packages)
            .wrap_err("Discovered workspace projects are malformed")?;

        if let Some(p) = progress {
            p.finish_discovery(projects.len());
        }

        self.root = normalizer.root().to_path_buf();
        self.set_projects(projects)?;
        Ok(())
    }

    fn set_projects(&mut self, projects: Vec<Project>) -> Result<(), MonomapError> {
        let mut name_to_index = HashMap::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            if name_to_index
                .insert(project.name().to_string(), index)
                .is_some()
            {
                return Err(MonomapError::malformed(format!(
                    "project name '{}' appears more than once",
                    project.name()
                )));
            }
        }

        if projects.iter().filter(|p| p.is_root()).count() > 1 {
            return Err(MonomapError::malformed(
                "more than one project lives at the repository root",
            ));
        }

        self.projects = projects;
        self.name_to_index = name_to_index;
        Ok(())
    }

    /// The directory project paths are relative to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Projects in discovery order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.name_to_index.get(name).map(|&i| &self.projects[i])
    }

    pub fn root_project(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.is_root())
    }

}

impl DiscoveryMethod {
    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryMethod::Pnpm => "pnpm",
            DiscoveryMethod::Manifests => "package.json manifests",
            DiscoveryMethod::Recorded(_) => "recorded package list",
        }
    }
}
