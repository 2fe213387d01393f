//! Markdown document generation

use std::fmt::Write;

use super::{ReportGenerator, WorkspaceSnapshot};
use crate::constants::tree::ROOT_PLACEHOLDER;
use crate::error::MonomapError;

pub struct MarkdownReportGenerator {
    title: String,
    overview: String,
}

impl MarkdownReportGenerator {
    pub fn new(title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            overview: overview.into(),
        }
    }
}

impl ReportGenerator for MarkdownReportGenerator {
    fn generate_report(&self, snapshot: &WorkspaceSnapshot) -> Result<String, MonomapError> {
        let mut output = String::new();

        writeln!(output, "# {}", self.title)?;
        writeln!(output)?;
        let overview = self.overview.trim();
        if !overview.is_empty() {
            writeln!(output, "{overview}")?;
            writeln!(output)?;
        }

        writeln!(output, "## Structure")?;
        writeln!(output)?;
        output.push_str(snapshot.tree_text());
        writeln!(output)?;

        writeln!(output, "## Dependency Graph")?;
        writeln!(output)?;
        output.push_str(snapshot.graph_text());
        writeln!(output)?;

        writeln!(output, "## Projects")?;
        writeln!(output)?;
        writeln!(output, "| Project | Path | Internal dependencies |")?;
        writeln!(output, "| --- | --- | --- |")?;
        for project in snapshot.projects() {
            let path = if project.is_root() {
                ROOT_PLACEHOLDER
            } else {
                project.path()
            };
            writeln!(
                output,
                "| `{}` | `{}` | {} |",
                project.name(),
                path,
                snapshot.internal_dependencies(project).len()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::GraphDirection;
    use crate::core::Project;

    #[test]
    fn test_markdown_document() {
        let snapshot = WorkspaceSnapshot::build(
            vec![
                Project::new("@x/core", "packages/core", vec![], vec![], 0).unwrap(),
                Project::new("@x/api", "services/api", vec!["@x/core".into()], vec![], 1)
                    .unwrap(),
            ],
            GraphDirection::TopDown,
            false,
        )
        .unwrap();

        let report = MarkdownReportGenerator::new("Acme", "Two projects.")
            .generate_report(&snapshot)
            .unwrap();

        let expected = "\
# Acme

Two projects.

## Structure

```
├── packages
│   └── core (@x/core)
└── services
    └── api (@x/api)
```

## Dependency Graph

```mermaid
graph TD
    subgraph packages[\"packages\"]
        _x_core[\"@x/core\"]
    end
    subgraph services[\"services\"]
        _x_api[\"@x/api\"]
    end
    services --> packages
```

## Projects

| Project | Path | Internal dependencies |
| --- | --- | --- |
| `@x/core` | `packages/core` | 0 |
| `@x/api` | `services/api` | 1 |
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_overview_is_skipped() {
        let snapshot = WorkspaceSnapshot::build(
            vec![Project::new("solo", "", vec![], vec![], 0).unwrap()],
            GraphDirection::LeftRight,
            false,
        )
        .unwrap();

        let report = MarkdownReportGenerator::new("Solo", "  ")
            .generate_report(&snapshot)
            .unwrap();

        assert!(report.starts_with("# Solo\n\n## Structure\n"));
        assert!(report.contains("| `solo` | `.` | 0 |"));
    }
}
