//! # modgraph - Dependency Graphs for Multi-Module Projects
//!
//! modgraph reads the `module.toml` manifests of a multi-module project and
//! draws the dependencies between its projects as a Graphviz DOT document.
//! Projects are colored by the build plugins they apply, implementation-only
//! dependencies are drawn dotted, and projects no other project depends on
//! are placed on a shared top rank.
//!
//! ## Main Components
//!
//! - **Project**: The hierarchical project tree (`:`, `:app`, `:libs:ui`)
//! - **Discovery**: Builds the project tree from `module.toml` files on disk
//! - **Graph**: Collects edges, classifies projects and renders DOT
//! - **Output**: Output file lifecycle and optional PNG conversion
//!
//! ## Usage
//!
//! ### Example: Graphing a Project on Disk
//!
//! ```no_run
//! use std::path::Path;
//!
//! use modgraph::discovery::ProjectDiscovery;
//! use modgraph::graph::{DependencyGraphBuilder, GraphRenderer};
//! use modgraph::output::GraphFile;
//!
//! # fn main() -> miette::Result<()> {
//! let repo_root = Path::new("/path/to/your/project");
//!
//! // Step 1: Discover the project tree
//! let root = ProjectDiscovery::new().discover(repo_root, None)?;
//!
//! // Step 2: Build the dependency graph
//! let graph = DependencyGraphBuilder::new().build(&root)?;
//! println!(
//!     "{} projects, {} dependencies",
//!     graph.node_count(),
//!     graph.edge_count()
//! );
//!
//! // Step 3: Write the DOT document
//! let dot = GraphRenderer::new().render_dot_to_string(&graph)?;
//! let file = GraphFile::provide(GraphFile::default_path(repo_root), true)?;
//! file.write_all(dot.as_bytes())?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Converting to PNG
//!
//! ```no_run
//! use std::path::Path;
//! use std::time::Duration;
//!
//! use modgraph::rasterize::{DotRasterizer, RasterOutcome};
//!
//! # fn main() -> miette::Result<()> {
//! let rasterizer = DotRasterizer::new("dot").with_timeout(Duration::from_secs(30));
//!
//! match rasterizer.rasterize(Path::new("graphs/dependency-graph/project.dot"))? {
//!     RasterOutcome::Converted(png) => println!("Wrote {}", png.display()),
//!     RasterOutcome::TimedOut => eprintln!("dot took too long"),
//!     RasterOutcome::Failed { stderr, .. } => eprintln!("dot failed: {stderr}"),
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod project;
pub mod rasterize;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
