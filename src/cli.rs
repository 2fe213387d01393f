use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::common::{CommonArgs, GraphArgs};

#[derive(Parser)]
#[command(
    name = "monomap",
    about = "🗺️ Map the projects and dependencies of a JavaScript monorepo",
    long_about = "monomap inspects a pnpm or npm-workspaces monorepo and writes a Markdown \
                  document describing it: a folder tree of every workspace project and a \
                  Mermaid diagram of the dependencies between top-level folders.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the full structure document
    ///
    /// Discovers every workspace project, renders the folder tree and the
    /// dependency graph, and assembles them into a single Markdown file.
    #[command(
        long_about = "Generate a Markdown document describing the monorepo. The document \
                      contains an overview paragraph, a folder tree of all workspace \
                      projects, a Mermaid dependency graph grouped by top-level folder, and \
                      a table of projects. With --ai the overview is written by an \
                      OpenAI-compatible model; any failure falls back to a locally \
                      generated overview."
    )]
    Generate {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        graph: GraphArgs,

        /// Output file (defaults to ARCHITECTURE.md in the repository root)
        #[arg(short, long, env = "MONOMAP_OUTPUT")]
        output: Option<PathBuf>,

        /// Print the document instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Document title
        #[arg(long, env = "MONOMAP_TITLE")]
        title: Option<String>,

        /// Document format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "markdown",
            env = "MONOMAP_FORMAT"
        )]
        format: ReportFormat,

        /// Ask an OpenAI-compatible model for the overview paragraph
        #[arg(long, env = "MONOMAP_AI")]
        ai: bool,

        /// Model used with --ai
        #[arg(long, env = "MONOMAP_AI_MODEL")]
        model: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, env = "MONOMAP_FORCE")]
        force: bool,
    },

    /// Print the folder tree of workspace projects
    Tree {
        #[command(flatten)]
        common: CommonArgs,

        /// Wrap the tree in a Markdown code fence
        #[arg(long)]
        fenced: bool,
    },

    /// Print the dependency graph between top-level folders
    #[command(
        long_about = "Render the dependency graph between top-level folders. Each folder \
                      becomes a Mermaid subgraph containing its projects; an edge means some \
                      project in one folder depends on a project in another. Dependencies on \
                      packages outside the workspace are left out."
    )]
    Graph {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        graph: GraphArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "mermaid",
            env = "MONOMAP_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// List the project dependencies behind each edge (ascii only)
        #[arg(long, env = "MONOMAP_SHOW_LINKS")]
        show_links: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where workspace projects are discovered from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `pnpm list --recursive --json`
    Pnpm,
    /// `package.json` files on disk
    Manifests,
    /// A recorded `pnpm list --json` file (see --from-json)
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum GraphDirection {
    #[default]
    #[value(name = "TD")]
    #[serde(rename = "TD", alias = "td")]
    TopDown,
    #[value(name = "LR")]
    #[serde(rename = "LR", alias = "lr")]
    LeftRight,
    #[value(name = "BT")]
    #[serde(rename = "BT", alias = "bt")]
    BottomTop,
    #[value(name = "RL")]
    #[serde(rename = "RL", alias = "rl")]
    RightLeft,
}

impl GraphDirection {
    pub fn as_mermaid(&self) -> &'static str {
        match self {
            GraphDirection::TopDown => "TD",
            GraphDirection::LeftRight => "LR",
            GraphDirection::BottomTop => "BT",
            GraphDirection::RightLeft => "RL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Mermaid,
    Ascii,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "monomap",
            "generate",
            "/repo",
            "--source",
            "manifests",
            "--direction",
            "LR",
            "--exclude-dev",
            "--force",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                common,
                graph,
                force,
                format,
                ..
            } => {
                assert_eq!(common.root, Some(PathBuf::from("/repo")));
                assert_eq!(common.source, Some(SourceKind::Manifests));
                assert_eq!(graph.direction, Some(GraphDirection::LeftRight));
                assert!(graph.exclude_dev);
                assert!(force);
                assert_eq!(format, ReportFormat::Markdown);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Cli::try_parse_from(["monomap", "generate", "--stdout", "-o", "x.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_direction_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            direction: GraphDirection,
        }
        let wrapper: Wrapper = toml::from_str("direction = \"lr\"").unwrap();
        assert_eq!(wrapper.direction, GraphDirection::LeftRight);
    }
}
