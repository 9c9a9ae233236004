//! Dot command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{CommonArgs, ConfigBuilder, FromCommand};
use crate::config::DotOptions;
use crate::error::ModgraphError;

pub(crate) fn dot_options(common: CommonArgs) -> Result<DotOptions, ModgraphError> {
    DotOptions::builder()
        .with_root(common.get_root())
        .with_output(common.output)
        .with_reset(!common.no_reset)
        .with_title(common.title)
        .build()
}

impl FromCommand for DotOptions {
    fn from_command(command: Commands) -> Result<Self, ModgraphError> {
        match command {
            Commands::Dot { common } => dot_options(common),
            _ => Err(ModgraphError::ConfigurationError {
                message: "Invalid command type for DotOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DotOptions);

/// Execute the dot command
pub fn execute_dot_command(command: Commands) -> Result<()> {
    let config = DotOptions::from_command(command)
        .wrap_err("Failed to parse dot command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::dot::DotExecutor;
    DotExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_from_dot_command() {
        let cli = Cli::try_parse_from([
            "modgraph",
            "dot",
            "/repo",
            "--no-reset",
            "--title",
            "Demo",
        ])
        .unwrap();

        let options = DotOptions::try_from(cli.command).unwrap();

        assert_eq!(options.root, PathBuf::from("/repo"));
        assert_eq!(
            options.output,
            PathBuf::from("/repo/graphs/dependency-graph/project.dot")
        );
        assert!(!options.reset);
        assert_eq!(options.title.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_rejects_png_command() {
        let cli = Cli::try_parse_from(["modgraph", "png", "/repo"]).unwrap();
        assert!(DotOptions::from_command(cli.command).is_err());
    }
}
