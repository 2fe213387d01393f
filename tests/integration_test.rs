//! Integration tests for monomap using the library interface

use std::fs;
use std::path::Path;

use monomap::analyzer::WorkspaceAnalyzer;
use monomap::cli::GraphDirection;
use monomap::error::MonomapError;
use monomap::reports::{MarkdownReportGenerator, ReportGenerator, WorkspaceSnapshot};
use monomap::workspace_discovery::DiscoveryMethod;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// (directory relative to the root, name, dependencies, devDependencies)
type PackageDefinition<'a> = (&'a str, &'a str, Vec<&'a str>, Vec<&'a str>);

fn write_manifest(dir: &Path, name: &str, deps: &[&str], dev_deps: &[&str]) {
    fs::create_dir_all(dir).unwrap();

    let as_map = |names: &[&str]| -> serde_json::Value {
        names
            .iter()
            .map(|n| (n.to_string(), serde_json::Value::from("workspace:*")))
            .collect::<serde_json::Map<_, _>>()
            .into()
    };

    let manifest = serde_json::json!({
        "name": name,
        "version": "0.0.0",
        "dependencies": as_map(deps),
        "devDependencies": as_map(dev_deps),
    });
    fs::write(
        dir.join("package.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
}

/// Helper to create a monorepo whose root manifest lists workspace globs
fn create_monorepo(root_name: Option<&str>, packages: Vec<PackageDefinition>) -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let mut root_manifest = serde_json::json!({
        "private": true,
        "workspaces": ["apps/*", "packages/*", "services/*", "tools/*"],
    });
    if let Some(name) = root_name {
        root_manifest["name"] = serde_json::Value::from(name);
    }
    fs::write(
        root.join("package.json"),
        serde_json::to_string_pretty(&root_manifest).unwrap(),
    )
    .unwrap();

    for (dir, name, deps, dev_deps) in packages {
        write_manifest(&root.join(dir), name, &deps, &dev_deps);
    }

    temp
}

fn analyze(root: &Path) -> WorkspaceAnalyzer {
    let mut analyzer = WorkspaceAnalyzer::new();
    analyzer
        .discover_projects(root, &DiscoveryMethod::Manifests, &[], None)
        .unwrap();
    analyzer
}

fn snapshot(root: &Path, exclude_dev: bool) -> WorkspaceSnapshot {
    WorkspaceSnapshot::build(
        analyze(root).projects().to_vec(),
        GraphDirection::TopDown,
        exclude_dev,
    )
    .unwrap()
}

#[test]
fn test_core_and_api_scenario() {
    let temp = create_monorepo(
        None,
        vec![
            ("packages/core", "@x/core", vec![], vec![]),
            ("services/api", "@x/api", vec!["@x/core", "express"], vec![]),
        ],
    );

    let snapshot = snapshot(temp.path(), false);

    assert_eq!(
        snapshot.tree_text(),
        "```\n\
         ├── packages\n\
         │   └── core (@x/core)\n\
         └── services\n    \
         └── api (@x/api)\n\
         ```\n"
    );
    assert_eq!(
        snapshot.graph_text(),
        "```mermaid\n\
         graph TD\n    \
         subgraph packages[\"packages\"]\n        \
         _x_core[\"@x/core\"]\n    \
         end\n    \
         subgraph services[\"services\"]\n        \
         _x_api[\"@x/api\"]\n    \
         end\n    \
         services --> packages\n\
         ```\n"
    );
}

#[test]
fn test_single_root_project() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "solo", &["left-pad"], &[]);

    let snapshot = snapshot(temp.path(), false);

    assert_eq!(snapshot.projects().len(), 1);
    assert_eq!(snapshot.tree_text(), "```\nsolo\n```\n");
    assert_eq!(snapshot.graph().subgraph_count(), 0);
    assert_eq!(snapshot.graph().edge_count(), 0);
    assert_eq!(
        snapshot.graph_text(),
        "```mermaid\ngraph TD\n    solo[\"solo\"]\n```\n"
    );
}

#[test]
fn test_named_root_with_members() {
    let temp = create_monorepo(
        Some("monorepo"),
        vec![
            ("apps/web", "@x/web", vec!["@x/ui"], vec!["@x/testing"]),
            ("packages/ui", "@x/ui", vec![], vec![]),
            ("tools/testing", "@x/testing", vec![], vec![]),
        ],
    );

    let snapshot = snapshot(temp.path(), false);
    let tree = snapshot.tree_text();

    assert!(predicate::str::starts_with("```\nmonorepo\n").eval(tree));
    assert!(predicate::str::contains("├── apps\n│   └── web (@x/web)").eval(tree));
    assert!(predicate::str::contains("└── tools\n    └── testing (@x/testing)").eval(tree));
    assert!(predicate::str::contains("    apps --> packages & tools\n").eval(snapshot.graph_text()));
    assert!(predicate::str::contains("    monorepo[\"monorepo\"]\n").eval(snapshot.graph_text()));
}

#[test]
fn test_exclude_dev_drops_dev_only_edges() {
    let temp = create_monorepo(
        None,
        vec![
            ("apps/web", "@x/web", vec!["@x/ui"], vec!["@x/testing"]),
            ("packages/ui", "@x/ui", vec![], vec![]),
            ("tools/testing", "@x/testing", vec![], vec![]),
        ],
    );

    let with_dev = snapshot(temp.path(), false);
    let without_dev = snapshot(temp.path(), true);

    assert_eq!(with_dev.graph().edge_count(), 2);
    assert_eq!(without_dev.graph().edge_count(), 1);
    assert!(predicate::str::contains("apps --> packages\n").eval(without_dev.graph_text()));
}

#[test]
fn test_same_folder_dependencies_make_no_edges() {
    let temp = create_monorepo(
        None,
        vec![
            ("packages/core", "core", vec![], vec![]),
            ("packages/ui", "ui", vec!["core"], vec!["core"]),
        ],
    );

    let snapshot = snapshot(temp.path(), false);
    assert_eq!(snapshot.graph().edge_count(), 0);
    assert!(predicate::str::contains("-->").not().eval(snapshot.graph_text()));
}

#[test]
fn test_ignore_patterns() {
    let temp = create_monorepo(
        None,
        vec![
            ("packages/core", "core", vec![], vec![]),
            ("packages/legacy", "legacy", vec![], vec![]),
        ],
    );

    let mut analyzer = WorkspaceAnalyzer::new();
    analyzer
        .discover_projects(
            temp.path(),
            &DiscoveryMethod::Manifests,
            &["packages/legacy".to_string()],
            None,
        )
        .unwrap();

    let names: Vec<&str> = analyzer.projects().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["core"]);
}

#[test]
fn test_output_is_deterministic() {
    let temp = create_monorepo(
        Some("monorepo"),
        vec![
            ("apps/web", "@x/web", vec!["@x/ui", "@x/core"], vec![]),
            ("packages/core", "@x/core", vec![], vec![]),
            ("packages/ui", "@x/ui", vec!["@x/core"], vec![]),
            ("services/api", "@x/api", vec!["@x/core"], vec![]),
        ],
    );

    let render = || {
        MarkdownReportGenerator::new("Acme", "overview")
            .generate_report(&snapshot(temp.path(), false))
            .unwrap()
    };

    assert_eq!(render(), render());
}

#[test]
fn test_recorded_package_list() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("pnpm-list.json");
    fs::write(
        &list,
        r#"[
  { "name": "monorepo", "path": "/home/ci/repo", "private": true },
  { "name": "@x/core", "path": "/home/ci/repo/packages/core" },
  {
    "name": "@x/api",
    "path": "/home/ci/repo/services/api",
    "dependencies": { "@x/core": { "from": "@x/core", "version": "link:../../packages/core" } }
  }
]"#,
    )
    .unwrap();

    let mut analyzer = WorkspaceAnalyzer::new();
    analyzer
        .discover_projects(
            temp.path(),
            &DiscoveryMethod::Recorded(list),
            &[],
            None,
        )
        .unwrap();

    let paths: Vec<&str> = analyzer.projects().iter().map(|p| p.path()).collect();
    assert_eq!(paths, ["", "packages/core", "services/api"]);
    assert_eq!(analyzer.root(), Path::new("/home/ci/repo"));
}

#[test]
fn test_malformed_manifest_fails_discovery() {
    let temp = create_monorepo(None, vec![("packages/core", "core", vec![], vec![])]);
    fs::write(temp.path().join("packages/core/package.json"), "{ not json").unwrap();

    let mut analyzer = WorkspaceAnalyzer::new();
    let result = analyzer.discover_projects(temp.path(), &DiscoveryMethod::Manifests, &[], None);
    assert!(result.is_err());
}

#[test]
fn test_colliding_paths_are_ambiguous() {
    let projects = vec![
        monomap::core::Project::new("a", "packages/shared", vec![], vec![], 0).unwrap(),
        monomap::core::Project::new("b", "packages/shared", vec![], vec![], 1).unwrap(),
    ];

    let result = WorkspaceSnapshot::build(projects, GraphDirection::TopDown, false);
    assert!(matches!(result, Err(MonomapError::AmbiguousPath { .. })));
}

#[test]
fn test_recorded_list_without_root_package() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("pnpm-list.json");
    fs::write(
        &list,
        r#"[
  { "name": "a", "path": "/ci/repo/packages/a", "dependencies": { "b": "workspace:*" } },
  { "name": "b", "path": "/ci/repo/packages/b" }
]"#,
    )
    .unwrap();

    let mut analyzer = WorkspaceAnalyzer::new();
    analyzer
        .discover_projects(
            Path::new("/ci/repo"),
            &DiscoveryMethod::Recorded(list.clone()),
            &[],
            None,
        )
        .unwrap();

    let snapshot =
        WorkspaceSnapshot::build(analyzer.projects().to_vec(), GraphDirection::TopDown, false)
            .unwrap();
    let keys: Vec<&str> = snapshot.graph().subgraphs().map(|s| s.key()).collect();
    assert_eq!(keys, ["packages"]);
    assert_eq!(snapshot.graph().edge_count(), 0);

    let mut elsewhere = WorkspaceAnalyzer::new();
    let result = elsewhere.discover_projects(
        Path::new("/local/checkout"),
        &DiscoveryMethod::Recorded(list),
        &[],
        None,
    );
    assert!(result.is_err());
}

#[test]
fn test_recorded_list_honours_ignore_patterns() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("pnpm-list.json");
    fs::write(
        &list,
        r#"[
  { "name": "monorepo", "path": "/home/ci/repo" },
  { "name": "@x/core", "path": "/home/ci/repo/packages/core" },
  { "name": "@x/legacy", "path": "/home/ci/repo/packages/legacy" }
]"#,
    )
    .unwrap();

    let mut analyzer = WorkspaceAnalyzer::new();
    analyzer
        .discover_projects(
            temp.path(),
            &DiscoveryMethod::Recorded(list),
            &["packages/legacy".to_string()],
            None,
        )
        .unwrap();

    let names: Vec<&str> = analyzer.projects().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["monorepo", "@x/core"]);
}
