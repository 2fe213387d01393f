//! Tree command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TreeOptions;
use crate::error::MonomapError;

impl FromCommand for TreeOptions {
    fn from_command(command: Commands) -> Result<Self, MonomapError> {
        match command {
            Commands::Tree { common, fenced } => {
                let root = common.get_root()?;
                let file = common.load_config(&root)?;

                TreeOptions::builder()
                    .with_method(common.discovery_method(&file)?)
                    .with_ignore(common.ignore_patterns(&file))
                    .with_fenced(fenced)
                    .with_root(root)
                    .build()
            }
            _ => Err(MonomapError::ConfigurationError {
                message: "Invalid command type for TreeOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TreeOptions);

/// Execute the tree command
pub fn execute_tree_command(command: Commands) -> Result<()> {
    let config = TreeOptions::from_command(command)
        .wrap_err("Failed to parse tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tree::TreeExecutor;
    TreeExecutor::execute(config)
}
