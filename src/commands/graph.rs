//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::MonomapError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, MonomapError> {
        match command {
            Commands::Graph {
                common,
                graph,
                format,
                show_links,
                output,
            } => {
                let root = common.get_root()?;
                let file = common.load_config(&root)?;

                GraphOptions::builder()
                    .with_method(common.discovery_method(&file)?)
                    .with_ignore(common.ignore_patterns(&file))
                    .with_format(format)
                    .with_direction(graph.direction(&file))
                    .with_exclude_dev(graph.exclude_dev(&file))
                    .with_show_links(show_links)
                    .with_output(output)
                    .with_root(root)
                    .build()
            }
            _ => Err(MonomapError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
