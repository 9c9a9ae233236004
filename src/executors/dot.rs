//! Dot command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::DotOptions;
use crate::discovery::ProjectDiscovery;
use crate::executors::CommandExecutor;
use crate::graph::{DependencyGraphBuilder, GraphRenderer};
use crate::output::GraphFile;
use crate::progress::ProgressReporter;
use crate::utils::string::pluralize;

pub struct DotExecutor;

impl CommandExecutor for DotExecutor {
    type Config = DotOptions;

    fn execute(config: Self::Config) -> Result<()> {
        generate_dot(&config)?;
        Ok(())
    }
}

/// Discover, build and render the graph, then write it to the configured
/// output file.
pub fn generate_dot(config: &DotOptions) -> Result<GraphFile> {
    eprintln!(
        "{} Generating project dependency graph...",
        style("📊").cyan()
    );

    let mut progress = ProgressReporter::new();
    let root = ProjectDiscovery::new()
        .discover(&config.root, Some(&mut progress))
        .wrap_err("Failed to discover projects")?;

    let graph = DependencyGraphBuilder::new()
        .with_title(config.title.clone())
        .build(&root)
        .wrap_err("Failed to build dependency graph")?;

    let dot = GraphRenderer::new()
        .render_dot_to_string(&graph)
        .wrap_err("Failed to render DOT graph")?;

    let file = GraphFile::provide(&config.output, config.reset)?;
    file.write_all(dot.as_bytes())?;

    eprintln!(
        "{} Project module dependency graph created at {}",
        style("✓").green(),
        style(file.path().display()).bold()
    );
    eprintln!(
        "  {} {}, {} {}, {} {}",
        style(graph.node_count()).yellow(),
        pluralize("project", graph.node_count()),
        style(graph.edge_count()).yellow(),
        pluralize("edge", graph.edge_count()),
        style(graph.roots().len()).yellow(),
        pluralize("root", graph.roots().len())
    );

    Ok(file)
}
