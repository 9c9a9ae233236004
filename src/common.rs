//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by the `dot` and `png` commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Root directory of the multi-module project (defaults to current
    /// directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output DOT file (defaults to graphs/dependency-graph/project.dot under
    /// the project root)
    #[arg(short, long, env = "MODGRAPH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Keep an existing output file instead of deleting and recreating it
    #[arg(long, env = "MODGRAPH_NO_RESET")]
    pub no_reset: bool,

    /// Graph title (defaults to the root project's name)
    #[arg(long, env = "MODGRAPH_TITLE")]
    pub title: Option<String>,
}

impl CommonArgs {
    /// Get the project root, using the current directory if none provided
    pub fn get_root(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ModgraphError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::ModgraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ModgraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Build a `ConfigurationError` for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> crate::error::ModgraphError {
    crate::error::ModgraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
