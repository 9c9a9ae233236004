//! Command implementations for the modgraph CLI
//!
//! - dot: Write the project dependency graph as a DOT file
//! - png: Write the DOT file and convert it to PNG with Graphviz

pub mod dot;
pub mod png;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Dot { .. } => dot::execute_dot_command(command),
        Commands::Png { .. } => png::execute_png_command(command),
    }
}
