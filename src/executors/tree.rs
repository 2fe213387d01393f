//! Tree command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::TreeOptions;
use crate::executors::{CommandExecutor, discover};
use crate::progress::ProgressReporter;
use crate::tree::{PathTreeBuilder, TreeRenderer};

pub struct TreeExecutor;

impl CommandExecutor for TreeExecutor {
    type Config = TreeOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_terminal();
        let analyzer = discover(&config.root, &config.method, &config.ignore, progress.as_mut())?;

        if analyzer.projects().is_empty() {
            eprintln!("{} No workspace projects found", style("ℹ").blue());
            return Ok(());
        }

        let forest = PathTreeBuilder::new()
            .build(analyzer.projects())
            .wrap_err("Failed to build the folder tree")?;

        let renderer = TreeRenderer::new();
        let text = if config.fenced {
            renderer.fenced(&forest)?
        } else {
            renderer.render(&forest)?
        };

        print!("{text}");
        Ok(())
    }
}
