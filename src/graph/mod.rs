//! # Graph Construction and Rendering Module
//!
//! Builds the project dependency graph from a project tree and writes it as
//! Graphviz DOT.
//!
//! ## Components
//!
//! ### Graph Building
//! - **discover_projects**: breadth-first list of every project, the initial
//!   root candidates
//! - **collect_edges**: second breadth-first walk that registers nodes,
//!   merges edges per (source, target) pair and classifies projects
//! - **finalize**: sorts nodes, settles the root set and produces a
//!   [`ProjectGraph`]
//! - **DependencyGraphBuilder**: runs the three steps with a configurable
//!   [`Classifier`] and [`TraitPolicy`]
//!
//! ### Graph Rendering
//! - **GraphRenderer**: deterministic DOT output with category colors, a
//!   shared rank for root projects and dotted implementation edges
//!
//! ## Example
//!
//! ```
//! use modgraph::common::ConfigBuilder;
//! use modgraph::graph::{DependencyGraphBuilder, GraphRenderer};
//! use modgraph::project::{DependencyDeclaration, Project};
//!
//! # fn main() -> miette::Result<()> {
//! let root = Project::builder()
//!     .with_path(":")
//!     .with_name("demo")
//!     .with_child(
//!         Project::builder()
//!             .with_path(":app")
//!             .with_declaration(DependencyDeclaration::new("implementation", [":core"]))
//!             .build()?,
//!     )
//!     .with_child(Project::builder().with_path(":core").build()?)
//!     .build()?;
//!
//! let graph = DependencyGraphBuilder::new().build(&root)?;
//! let dot = GraphRenderer::new().render_dot_to_string(&graph)?;
//!
//! assert!(dot.starts_with("digraph {"));
//! assert!(dot.contains("\":app\" -> \":core\" [style=dotted]"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod classify;
mod policy;
mod renderer;
mod types;

pub use builder::{
    DependencyGraphBuilder, EdgeCollection, collect_edges, discover_projects, finalize,
};
pub use classify::{CategoryRule, Classifier};
pub use policy::{SuffixTraitRule, TraitPolicy};
pub use renderer::GraphRenderer;
pub use types::{Category, DependencyEdge, EdgeTrait, ProjectGraph, ProjectNode};
