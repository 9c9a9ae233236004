use clap::{Parser, Subcommand};

use crate::common::CommonArgs;
use crate::constants;

#[derive(Parser)]
#[command(
    name = "modgraph",
    about = "📊 Render a multi-module project's dependency graph",
    long_about = "modgraph reads the module.toml manifests of a multi-module project, collects \
                  the dependencies between its projects, and writes them as a Graphviz DOT \
                  file. Projects are colored by the plugins they apply, implementation-only \
                  dependencies are drawn dotted, and projects nothing depends on share the top \
                  rank.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the project dependency graph as a DOT file
    #[command(
        long_about = "Walk the project tree, collect every project-to-project dependency, and \
                      write the graph to a DOT file. By default an existing file at the output \
                      path is deleted and recreated first."
    )]
    Dot {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Generate the project dependency graph and convert it to PNG
    #[command(
        long_about = "Generate the DOT file, then run Graphviz (`dot -Tpng -O`) to produce a PNG \
                      next to it. The DOT file is removed after a successful conversion unless \
                      --keep-dot is given. Conversion is best effort: a missing or slow dot \
                      binary only produces a warning."
    )]
    Png {
        #[command(flatten)]
        common: CommonArgs,

        /// Keep the intermediate DOT file after conversion
        #[arg(long, env = "MODGRAPH_KEEP_DOT")]
        keep_dot: bool,

        /// Seconds to wait for the dot process before giving up
        #[arg(
            long,
            value_name = "SECONDS",
            default_value_t = constants::render::DOT_TIMEOUT.as_secs(),
            env = "MODGRAPH_TIMEOUT_SECS"
        )]
        timeout_secs: u64,

        /// Graphviz program used for the conversion
        #[arg(
            long,
            value_name = "PROGRAM",
            default_value = constants::render::DOT_PROGRAM,
            env = "MODGRAPH_DOT_PROGRAM"
        )]
        dot_program: String,
    },
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
    fn test_parse_png_defaults() {
        let cli = Cli::try_parse_from(["modgraph", "png", "/tmp/project"]).unwrap();
        match cli.command {
            Commands::Png {
                common,
                keep_dot,
                timeout_secs,
                dot_program,
            } => {
                assert_eq!(common.path, Some("/tmp/project".into()));
                assert!(!keep_dot);
                assert_eq!(timeout_secs, 60);
                assert_eq!(dot_program, "dot");
            }
            Commands::Dot { .. } => panic!("Expected png command"),
        }
    }

    #[test]
    fn test_parse_dot_no_reset() {
        let cli = Cli::try_parse_from(["modgraph", "dot", "--no-reset", "-o", "out.dot"]).unwrap();
        match cli.command {
            Commands::Dot { common } => {
                assert!(common.no_reset);
                assert_eq!(common.output, Some("out.dot".into()));
            }
            Commands::Png { .. } => panic!("Expected dot command"),
        }
    }
}
