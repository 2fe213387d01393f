use std::collections::{HashMap, HashSet};
use std::io::Write;

use crate::cli::GraphDirection;
use crate::constants::graph::{CONTAINER_ID_PREFIX, INDENT, RESERVED_ID_CHARS};
use crate::constants::tree::{BLANK, BRANCH, CORNER, VERTICAL};
use crate::error::MonomapError;
use crate::graph::{SubgraphNode, WorkspaceGraph};

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(MonomapError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(MonomapError::from)
    };
}

/// Replace every character Mermaid rejects in identifiers with `_`
///
/// Idempotent: sanitizing an already sanitized identifier changes nothing.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED_ID_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

pub struct GraphRenderer {
    direction: GraphDirection,
    show_links: bool,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(GraphDirection::default(), false)
    }
}

impl GraphRenderer {
    /// `show_links` lists the project-level dependencies behind each edge in
    /// ASCII output
    pub fn new(direction: GraphDirection, show_links: bool) -> Self {
        Self {
            direction,
            show_links,
        }
    }

    /// Mermaid flowchart: one container per subgraph, root projects as
    /// standalone nodes, one fan-out edge line per depending subgraph
    pub fn render_mermaid(
        &self,
        graph: &WorkspaceGraph,
        output: &mut dyn Write,
    ) -> Result<(), MonomapError> {
        writeln_out!(output, "graph {}", self.direction.as_mermaid())?;

        let ids = container_ids(graph);
        let container_id = |key: &str| {
            ids.get(key)
                .cloned()
                .unwrap_or_else(|| sanitize_identifier(key))
        };

        for subgraph in graph.subgraphs() {
            writeln_out!(
                output,
                "{INDENT}subgraph {}[\"{}\"]",
                container_id(subgraph.key()),
                subgraph.key()
            )?;
            for member in subgraph.members() {
                writeln_out!(
                    output,
                    "{INDENT}{INDENT}{}[\"{}\"]",
                    sanitize_identifier(member.name()),
                    member.name()
                )?;
            }
            writeln_out!(output, "{INDENT}end")?;
        }

        for project in graph.ungrouped() {
            writeln_out!(
                output,
                "{INDENT}{}[\"{}\"]",
                sanitize_identifier(project.name()),
                project.name()
            )?;
        }

        for subgraph in graph.subgraphs() {
            let targets: Vec<String> = graph
                .depends_on(subgraph.key())
                .into_iter()
                .map(|(target, _)| container_id(target.key()))
                .collect();

            if !targets.is_empty() {
                writeln_out!(
                    output,
                    "{INDENT}{} --> {}",
                    container_id(subgraph.key()),
                    targets.join(" & ")
                )?;
            }
        }

        Ok(())
    }

    /// Console-friendly listing of subgraphs and their dependencies
    pub fn render_ascii(
        &self,
        graph: &WorkspaceGraph,
        output: &mut dyn Write,
    ) -> Result<(), MonomapError> {
        if graph.is_empty() {
            writeln_out!(output, "No workspace projects found to visualize")?;
            return Ok(());
        }

        for subgraph in graph.subgraphs() {
            writeln_out!(output, "{}/", subgraph.key())?;
            writeln_out!(output, "  📦 {}", member_names(subgraph))?;

            let depends_on = graph.depends_on(subgraph.key());
            if depends_on.is_empty() {
                writeln_out!(output, "  {CORNER}(no cross-folder dependencies)")?;
            }

            for (i, (target, edge)) in depends_on.iter().enumerate() {
                let is_last = i == depends_on.len() - 1;
                let prefix = if is_last { CORNER } else { BRANCH };
                writeln_out!(output, "  {prefix}→ {}/", target.key())?;

                if self.show_links {
                    let detail_prefix = if is_last { BLANK } else { VERTICAL };
                    for (j, link) in edge.links().iter().enumerate() {
                        let connector = if j == edge.links().len() - 1 {
                            CORNER
                        } else {
                            BRANCH
                        };
                        writeln_out!(
                            output,
                            "  {detail_prefix}{connector}{} → {}",
                            link.from_project,
                            link.to_project
                        )?;
                    }
                }
            }

            writeln_out!(output)?;
        }

        for project in graph.ungrouped() {
            writeln_out!(output, "{} (repository root)", project.name())?;
        }

        Ok(())
    }

    /// Mermaid source as a string
    pub fn mermaid_string(&self, graph: &WorkspaceGraph) -> Result<String, MonomapError> {
        let mut buffer = Vec::new();
        self.render_mermaid(graph, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| MonomapError::Io(std::io::Error::other(e)))
    }

    /// Mermaid source wrapped in a fenced block, ready for Markdown
    pub fn fenced(&self, graph: &WorkspaceGraph) -> Result<String, MonomapError> {
        Ok(format!("```mermaid\n{}```\n", self.mermaid_string(graph)?))
    }
}

/// Mermaid rejects a container whose id equals a node id, so a subgraph
/// takes its sanitized key only while that id is free.
fn container_ids(graph: &WorkspaceGraph) -> HashMap<String, String> {
    let mut taken: HashSet<String> = graph
        .subgraphs()
        .flat_map(|s| s.members())
        .chain(graph.ungrouped())
        .map(|p| sanitize_identifier(p.name()))
        .collect();

    let mut ids = HashMap::new();
    for subgraph in graph.subgraphs() {
        let mut id = sanitize_identifier(subgraph.key());
        while taken.contains(&id) {
            id = format!("{CONTAINER_ID_PREFIX}{id}");
        }
        taken.insert(id.clone());
        ids.insert(subgraph.key().to_string(), id);
    }
    ids
}

fn member_names(subgraph: &SubgraphNode) -> String {
    subgraph
        .members()
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}
