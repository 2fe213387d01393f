//! Core graph types
//!
//! This module contains the fundamental data structures used in the
//! subgraph dependency graph.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::core::Project;

/// All projects sharing one top-level folder
#[derive(Debug, Clone, Serialize)]
pub struct SubgraphNode {
    key: String,
    sequence: usize,
    members: Vec<Project>,
}

impl SubgraphNode {
    pub(crate) fn new(key: impl Into<String>, sequence: usize) -> Self {
        Self {
            key: key.into(),
            sequence,
            members: Vec::new(),
        }
    }

    pub(crate) fn push_member(&mut self, project: Project) {
        self.members.push(project);
    }

    /// The first path segment shared by every member
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Order in which this subgraph was first encountered
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn members(&self) -> &[Project] {
        &self.members
    }
}

/// A project-level dependency that produced a subgraph edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub from_project: String,
    pub to_project: String,
}

/// Dependency of one subgraph on another
///
/// One edge exists per ordered subgraph pair no matter how many project
/// dependencies support it; those are kept in `links`.
#[derive(Debug, Clone, Serialize)]
pub struct SubgraphEdge {
    sequence: usize,
    links: Vec<ProjectLink>,
}

impl SubgraphEdge {
    pub(crate) fn new(sequence: usize, link: ProjectLink) -> Self {
        Self {
            sequence,
            links: vec![link],
        }
    }

    pub(crate) fn push_link(&mut self, link: ProjectLink) {
        if !self.links.contains(&link) {
            self.links.push(link);
        }
    }

    /// Order in which this edge was first discovered
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn links(&self) -> &[ProjectLink] {
        &self.links
    }
}

/// Subgraphs, their dependencies, and the projects that belong to none
#[derive(Debug, Clone, Default)]
pub struct WorkspaceGraph {
    pub(crate) graph: DiGraph<SubgraphNode, SubgraphEdge>,
    pub(crate) ungrouped: Vec<Project>,
}

impl WorkspaceGraph {
    /// Subgraphs in encounter order
    pub fn subgraphs(&self) -> impl Iterator<Item = &SubgraphNode> {
        // node indices are handed out sequentially and never removed
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    pub fn subgraph(&self, key: &str) -> Option<&SubgraphNode> {
        self.index_of(key).map(|idx| &self.graph[idx])
    }

    pub fn subgraph_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Root projects, drawn outside every subgraph
    pub fn ungrouped(&self) -> &[Project] {
        &self.ungrouped
    }

    /// Subgraphs `key` depends on, in order of first discovery
    pub fn depends_on(&self, key: &str) -> Vec<(&SubgraphNode, &SubgraphEdge)> {
        let Some(idx) = self.index_of(key) else {
            return Vec::new();
        };

        let mut targets: Vec<(&SubgraphNode, &SubgraphEdge)> = self
            .graph
            .edges(idx)
            .map(|edge| (&self.graph[edge.target()], edge.weight()))
            .collect();
        targets.sort_by_key(|(_, edge)| edge.sequence());
        targets
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0 && self.ungrouped.is_empty()
    }

    pub(crate) fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| self.graph[idx].key() == key)
    }
}
