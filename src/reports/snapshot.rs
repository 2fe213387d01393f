use std::collections::HashSet;

use crate::cli::GraphDirection;
use crate::core::Project;
use crate::error::MonomapError;
use crate::graph::{DependencyGraphBuilder, GraphRenderer, WorkspaceGraph};
use crate::tree::{PathForest, PathTreeBuilder, TreeRenderer};

/// Everything derived from one set of projects: the folder tree, the
/// subgraph graph, and their fenced renderings
///
/// The texts are produced once at build time and are self-contained, so a
/// failure anywhere leaves no partial output behind.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot {
    projects: Vec<Project>,
    forest: PathForest,
    graph: WorkspaceGraph,
    tree_text: String,
    graph_text: String,
}

impl WorkspaceSnapshot {
    pub fn build(
        projects: Vec<Project>,
        direction: GraphDirection,
        exclude_dev: bool,
    ) -> Result<Self, MonomapError> {
        let forest = PathTreeBuilder::new().build(&projects)?;
        let graph = DependencyGraphBuilder::new(exclude_dev).build(&projects);

        let tree_text = TreeRenderer::new().fenced(&forest)?;
        let graph_text = GraphRenderer::new(direction, false).fenced(&graph)?;

        Ok(Self {
            projects,
            forest,
            graph,
            tree_text,
            graph_text,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn forest(&self) -> &PathForest {
        &self.forest
    }

    pub fn graph(&self) -> &WorkspaceGraph {
        &self.graph
    }

    /// Folder tree inside a plain code fence
    pub fn tree_text(&self) -> &str {
        &self.tree_text
    }

    /// Mermaid source inside a `mermaid` code fence
    pub fn graph_text(&self) -> &str {
        &self.graph_text
    }

    /// Dependencies of `project` that name another workspace project
    pub fn internal_dependencies<'a>(&'a self, project: &'a Project) -> Vec<&'a str> {
        let names: HashSet<&str> = self.projects.iter().map(Project::name).collect();
        let mut seen = HashSet::new();
        project
            .all_dependencies()
            .filter(|dependency| names.contains(dependency) && *dependency != project.name())
            .filter(|dependency| seen.insert(*dependency))
            .collect()
    }

    /// Dependencies in the project's own `@scope` that no workspace project
    /// provides, usually a published copy of something that lives in the repo
    pub fn unresolved_scoped_dependencies<'a>(&'a self, project: &'a Project) -> Vec<&'a str> {
        let names: HashSet<&str> = self.projects.iter().map(Project::name).collect();
        project
            .all_dependencies()
            .filter(|dependency| dependency.starts_with('@'))
            .filter(|dependency| project.shares_namespace_with(dependency))
            .filter(|dependency| !names.contains(dependency))
            .collect()
    }
}
