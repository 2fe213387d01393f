//! Generate command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{AiSettings, GenerateConfig, OutputTarget};
use crate::constants::ai::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::constants::output::{DEFAULT_FILE, DEFAULT_TITLE};
use crate::error::MonomapError;

impl FromCommand for GenerateConfig {
    fn from_command(command: Commands) -> Result<Self, MonomapError> {
        match command {
            Commands::Generate {
                common,
                graph,
                output,
                stdout,
                title,
                format,
                ai,
                model,
                force,
            } => {
                let root = common.get_root()?;
                let file = common.load_config(&root)?;

                let output = if stdout {
                    OutputTarget::Stdout
                } else {
                    match output {
                        Some(path) => OutputTarget::File(path),
                        None => OutputTarget::File(root.join(
                            file.document.output.as_deref().unwrap_or(DEFAULT_FILE),
                        )),
                    }
                };

                let ai = (ai || file.ai.enabled.unwrap_or(false)).then(|| AiSettings {
                    model: model
                        .or(file.ai.model.clone())
                        .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                    endpoint: file
                        .ai
                        .endpoint
                        .clone()
                        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                });

                GenerateConfig::builder()
                    .with_method(common.discovery_method(&file)?)
                    .with_ignore(common.ignore_patterns(&file))
                    .with_title(
                        title
                            .or(file.document.title.clone())
                            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                    )
                    .with_format(format)
                    .with_direction(graph.direction(&file))
                    .with_exclude_dev(graph.exclude_dev(&file))
                    .with_output(output)
                    .with_force(force)
                    .with_ai(ai)
                    .with_root(root)
                    .build()
            }
            _ => Err(MonomapError::ConfigurationError {
                message: "Invalid command type for GenerateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GenerateConfig);

/// Execute the generate command that writes the structure document
pub fn execute_generate_command(command: Commands) -> Result<()> {
    let config = GenerateConfig::from_command(command)
        .wrap_err("Failed to parse generate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::generate::GenerateExecutor;
    GenerateExecutor::execute(config)
}
