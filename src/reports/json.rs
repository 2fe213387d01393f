//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, WorkspaceSnapshot};
use crate::error::MonomapError;

pub struct JsonReportGenerator {
    title: String,
    overview: String,
}

impl JsonReportGenerator {
    pub fn new(title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            overview: overview.into(),
        }
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, snapshot: &WorkspaceSnapshot) -> Result<String, MonomapError> {
        let graph = snapshot.graph();

        let projects: Vec<_> = snapshot
            .projects()
            .iter()
            .map(|project| {
                json!({
                    "name": project.name(),
                    "namespace": project.namespace_prefix(),
                    "path": project.path(),
                    "dependencies": project.dependencies(),
                    "dev_dependencies": project.dev_dependencies(),
                    "internal_dependencies": snapshot.internal_dependencies(project),
                    "unresolved_scoped_dependencies":
                        snapshot.unresolved_scoped_dependencies(project),
                })
            })
            .collect();

        let subgraphs: Vec<_> = graph
            .subgraphs()
            .map(|subgraph| {
                let depends_on: Vec<_> = graph
                    .depends_on(subgraph.key())
                    .into_iter()
                    .map(|(target, edge)| {
                        json!({
                            "key": target.key(),
                            "links": edge.links(),
                        })
                    })
                    .collect();

                json!({
                    "key": subgraph.key(),
                    "members": subgraph.members().iter().map(|m| m.name()).collect::<Vec<_>>(),
                    "depends_on": depends_on,
                })
            })
            .collect();

        let report = json!({
            "title": self.title,
            "overview": self.overview,
            "project_count": projects.len(),
            "projects": projects,
            "subgraphs": subgraphs,
            "ungrouped": graph.ungrouped().iter().map(|p| p.name()).collect::<Vec<_>>(),
            "tree": snapshot.tree_text(),
            "mermaid": snapshot.graph_text(),
        });

        serde_json::to_string_pretty(&report).map_err(MonomapError::Json)
    }
}
