use std::collections::HashMap;

use petgraph::graph::NodeIndex;

use super::types::{ProjectLink, SubgraphEdge, SubgraphNode, WorkspaceGraph};
use crate::core::Project;
use crate::dependency_filter::DependencyFilter;

/// Builder for the subgraph dependency graph
///
/// Projects are grouped by the first segment of their path. An edge runs from
/// subgraph A to subgraph B when some member of A depends, by exact name, on a
/// member of B. Edges never point back at their own subgraph and are never
/// duplicated.
pub struct DependencyGraphBuilder {
    filter: DependencyFilter,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DependencyGraphBuilder {
    /// Create a new dependency graph builder
    ///
    /// # Arguments
    /// * `exclude_dev` - Ignore devDependencies when computing edges
    pub fn new(exclude_dev: bool) -> Self {
        Self {
            filter: DependencyFilter::new(exclude_dev),
        }
    }

    /// Build a fresh graph from projects in discovery order
    pub fn build(&self, projects: &[Project]) -> WorkspaceGraph {
        let mut workspace_graph = WorkspaceGraph::default();
        let mut key_indices: HashMap<&str, NodeIndex> = HashMap::new();

        // First, group non-root projects by their top-level folder
        for project in projects {
            let Some(key) = project.first_segment() else {
                workspace_graph.ungrouped.push(project.clone());
                continue;
            };

            let idx = *key_indices.entry(key).or_insert_with(|| {
                let sequence = workspace_graph.graph.node_count();
                workspace_graph
                    .graph
                    .add_node(SubgraphNode::new(key, sequence))
            });
            workspace_graph.graph[idx].push_member(project.clone());
        }

        // Resolve names once per run
        let by_name: HashMap<&str, &Project> = projects.iter().map(|p| (p.name(), p)).collect();

        // Then, connect subgraphs through resolved dependencies
        let mut edge_sequence = 0;
        for project in projects {
            let Some(from_idx) = project.first_segment().map(|key| key_indices[key]) else {
                continue;
            };

            for dependency in self.filter.dependencies_of(project) {
                // External names and root targets resolve to no subgraph
                let Some(target) = by_name.get(dependency) else {
                    continue;
                };
                let Some(to_idx) = target.first_segment().map(|key| key_indices[key]) else {
                    continue;
                };
                if from_idx == to_idx {
                    continue;
                }

                let link = ProjectLink {
                    from_project: project.name().to_string(),
                    to_project: target.name().to_string(),
                };

                match workspace_graph.graph.find_edge(from_idx, to_idx) {
                    Some(edge) => workspace_graph.graph[edge].push_link(link),
                    None => {
                        workspace_graph.graph.add_edge(
                            from_idx,
                            to_idx,
                            SubgraphEdge::new(edge_sequence, link),
                        );
                        edge_sequence += 1;
                    }
                }
            }
        }

        workspace_graph
    }
}
