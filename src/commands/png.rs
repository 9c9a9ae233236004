//! Png command implementation

use std::time::Duration;

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::commands::dot::dot_options;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PngOptions;
use crate::error::ModgraphError;

impl FromCommand for PngOptions {
    fn from_command(command: Commands) -> Result<Self, ModgraphError> {
        match command {
            Commands::Png {
                common,
                keep_dot,
                timeout_secs,
                dot_program,
            } => PngOptions::builder()
                .with_dot(dot_options(common)?)
                .with_keep_dot(keep_dot)
                .with_timeout(Duration::from_secs(timeout_secs))
                .with_dot_program(dot_program)
                .build(),
            _ => Err(ModgraphError::ConfigurationError {
                message: "Invalid command type for PngOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PngOptions);

/// Execute the png command
pub fn execute_png_command(command: Commands) -> Result<()> {
    let config = PngOptions::from_command(command)
        .wrap_err("Failed to parse png command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::png::PngExecutor;
    PngExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_from_png_command() {
        let cli = Cli::try_parse_from([
            "modgraph",
            "png",
            "/repo",
            "-o",
            "/tmp/out.dot",
            "--keep-dot",
            "--timeout-secs",
            "5",
            "--dot-program",
            "/opt/graphviz/bin/dot",
        ])
        .unwrap();

        let options = PngOptions::try_from(cli.command).unwrap();

        assert_eq!(options.dot.output, PathBuf::from("/tmp/out.dot"));
        assert!(options.dot.reset);
        assert!(options.keep_dot);
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.dot_program, "/opt/graphviz/bin/dot");
    }

    #[test]
    fn test_zero_timeout_is_a_configuration_error() {
        let cli =
            Cli::try_parse_from(["modgraph", "png", "/repo", "--timeout-secs", "0"]).unwrap();

        let err = PngOptions::from_command(cli.command).unwrap_err();
        assert!(matches!(err, ModgraphError::ConfigurationError { .. }));
    }

    #[test]
    fn test_rejects_dot_command() {
        let cli = Cli::try_parse_from(["modgraph", "dot"]).unwrap();
        assert!(PngOptions::from_command(cli.command).is_err());
    }
}
