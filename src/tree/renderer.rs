use std::fmt::Write;

use super::types::{PathForest, TreeNode};
use crate::constants::tree::{BLANK, BRANCH, CORNER, ROOT_PLACEHOLDER, VERTICAL};
use crate::error::MonomapError;

/// Renders a folder tree as conventional directory text-art
///
/// ```text
/// monorepo
/// ├── packages
/// │   ├── core (@x/core)
/// │   └── ui (@x/ui)
/// └── services
///     └── api (@x/api)
/// ```
#[derive(Debug, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Newline-terminated tree lines
    pub fn render(&self, forest: &PathForest) -> Result<String, MonomapError> {
        let mut output = String::new();
        self.render_level(forest.nodes(), "", &mut output)?;
        Ok(output)
    }

    /// Tree lines wrapped in a fenced block, ready for Markdown
    pub fn fenced(&self, forest: &PathForest) -> Result<String, MonomapError> {
        Ok(format!("```\n{}```\n", self.render(forest)?))
    }

    fn render_level(
        &self,
        nodes: &[TreeNode],
        prefix: &str,
        output: &mut String,
    ) -> Result<(), MonomapError> {
        // The root line never takes a connector, so it does not count as "last"
        let last_index = nodes.iter().rposition(|n| !n.is_root());

        for (i, node) in nodes.iter().enumerate() {
            if node.is_root() {
                writeln!(output, "{}", node.project_name().unwrap_or(ROOT_PLACEHOLDER))?;
                self.render_level(node.inner(), prefix, output)?;
                continue;
            }

            let is_last = Some(i) == last_index;
            let connector = if is_last { CORNER } else { BRANCH };
            writeln!(output, "{prefix}{connector}{}", label(node))?;

            if !node.is_leaf() {
                let guide = if is_last { BLANK } else { VERTICAL };
                self.render_level(node.inner(), &format!("{prefix}{guide}"), output)?;
            }
        }

        Ok(())
    }
}

fn label(node: &TreeNode) -> String {
    match node.project_name() {
        Some(project) if project != node.name() => format!("{} ({project})", node.name()),
        _ => node.name().to_string(),
    }
}
