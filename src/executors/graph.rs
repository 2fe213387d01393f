//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::executors::{CommandExecutor, discover};
use crate::graph::{DependencyGraphBuilder, GraphRenderer};
use crate::progress::ProgressReporter;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let mut progress = ProgressReporter::for_terminal();
        let analyzer = discover(&config.root, &config.method, &config.ignore, progress.as_mut())?;

        if analyzer.projects().is_empty() {
            eprintln!("{} No workspace projects found to visualize", style("ℹ").blue());
            return Ok(());
        }

        let graph = DependencyGraphBuilder::new(config.exclude_dev).build(analyzer.projects());
        let renderer = GraphRenderer::new(config.direction, config.show_links);

        // Determine output destination
        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        match config.format {
            GraphFormat::Mermaid => renderer
                .render_mermaid(&graph, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Ascii => renderer
                .render_ascii(&graph, output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
        }
        output_writer.flush().into_diagnostic()?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
