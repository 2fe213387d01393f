//! Tests for the graph renderer module

use monomap::cli::GraphDirection;
use monomap::core::Project;
use monomap::graph::{DependencyGraphBuilder, GraphRenderer, sanitize_identifier};
use pretty_assertions::assert_eq;

fn project(name: &str, path: &str, deps: &[&str], sequence: usize) -> Project {
    Project::new(
        name,
        path,
        deps.iter().map(|d| d.to_string()).collect(),
        vec![],
        sequence,
    )
    .unwrap()
}

/// A monorepo where several projects of one folder depend on the same folder
fn create_test_projects() -> Vec<Project> {
    vec![
        project("@acme/runtime", "core/runtime", &[], 0),
        project("@acme/storage", "core/storage", &["@acme/runtime"], 1),
        project(
            "@acme/backend",
            "apps/backend",
            &["@acme/runtime", "@acme/storage", "zod"],
            2,
        ),
        project("@acme/frontend", "apps/frontend", &["@acme/storage"], 3),
        project("@acme/cli", "tools/cli", &["@acme/backend", "@acme/runtime"], 4),
    ]
}

#[test]
fn test_mermaid_output() {
    let graph = DependencyGraphBuilder::default().build(&create_test_projects());
    let output = GraphRenderer::default().mermaid_string(&graph).unwrap();

    let expected = "\
graph TD
    subgraph core[\"core\"]
        _acme_runtime[\"@acme/runtime\"]
        _acme_storage[\"@acme/storage\"]
    end
    subgraph apps[\"apps\"]
        _acme_backend[\"@acme/backend\"]
        _acme_frontend[\"@acme/frontend\"]
    end
    subgraph tools[\"tools\"]
        _acme_cli[\"@acme/cli\"]
    end
    apps --> core
    tools --> apps & core
";
    assert_eq!(output, expected);
}

#[test]
fn test_mermaid_has_one_edge_line_per_source() {
    let graph = DependencyGraphBuilder::default().build(&create_test_projects());
    let output = GraphRenderer::default().mermaid_string(&graph).unwrap();

    let apps_lines = output
        .lines()
        .filter(|line| line.trim_start().starts_with("apps -->"))
        .count();
    assert_eq!(apps_lines, 1);
}

#[test]
fn test_mermaid_direction() {
    let graph = DependencyGraphBuilder::default().build(&create_test_projects());
    for (direction, header) in [
        (GraphDirection::TopDown, "graph TD\n"),
        (GraphDirection::LeftRight, "graph LR\n"),
        (GraphDirection::BottomTop, "graph BT\n"),
        (GraphDirection::RightLeft, "graph RL\n"),
    ] {
        let output = GraphRenderer::new(direction, false)
            .mermaid_string(&graph)
            .unwrap();
        assert!(output.starts_with(header));
    }
}

#[test]
fn test_identifiers_are_sanitized_consistently() {
    let graph = DependencyGraphBuilder::default().build(&[
        project("@my-org/ui-kit", "shared-libs/ui-kit", &[], 0),
        project("@my-org/web", "web-apps/web", &["@my-org/ui-kit"], 1),
    ]);
    let output = GraphRenderer::default().mermaid_string(&graph).unwrap();

    assert!(output.contains("    subgraph shared_libs[\"shared-libs\"]\n"));
    assert!(output.contains("        _my_org_ui_kit[\"@my-org/ui-kit\"]\n"));
    assert!(output.contains("    web_apps --> shared_libs\n"));
    assert_eq!(
        sanitize_identifier(&sanitize_identifier("@my-org/ui-kit")),
        "_my_org_ui_kit"
    );
}

#[test]
fn test_ascii_output() {
    let graph = DependencyGraphBuilder::default().build(&create_test_projects());
    let mut output = Vec::new();
    GraphRenderer::new(GraphDirection::TopDown, true)
        .render_ascii(&graph, &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    let expected = "\
core/
  📦 @acme/runtime, @acme/storage
  └── (no cross-folder dependencies)

apps/
  📦 @acme/backend, @acme/frontend
  └── → core/
      ├── @acme/backend → @acme/runtime
      ├── @acme/backend → @acme/storage
      └── @acme/frontend → @acme/storage

tools/
  📦 @acme/cli
  ├── → apps/
  │   └── @acme/cli → @acme/backend
  └── → core/
      └── @acme/cli → @acme/runtime

";
    assert_eq!(output, expected);
}

#[test]
fn test_ascii_empty_graph() {
    let graph = DependencyGraphBuilder::default().build(&[]);
    let mut output = Vec::new();
    GraphRenderer::default()
        .render_ascii(&graph, &mut output)
        .unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "No workspace projects found to visualize\n"
    );
}

#[test]
fn test_folder_named_like_its_only_project() {
    let projects = [
        project("utils", "utils", &[], 0),
        project("web", "apps/web", &["utils"], 1),
    ];
    let graph = DependencyGraphBuilder::default().build(&projects);
    let output = GraphRenderer::default().mermaid_string(&graph).unwrap();

    let expected = "\
graph TD
    subgraph sg_utils[\"utils\"]
        utils[\"utils\"]
    end
    subgraph apps[\"apps\"]
        web[\"web\"]
    end
    apps --> sg_utils
";
    assert_eq!(output, expected);
}
