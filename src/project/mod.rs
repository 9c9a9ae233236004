//! # Project Model
//!
//! The hierarchical project tree the graph builder consumes. A [`Project`]
//! owns its children, so the parent/child relation is always a finite tree;
//! dependency declarations refer to other projects by path and may form
//! cycles freely.
//!
//! ## Example
//!
//! ```
//! use modgraph::common::ConfigBuilder;
//! use modgraph::project::{DependencyDeclaration, Project};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let core = Project::builder().with_path(":core").build()?;
//! let app = Project::builder()
//!     .with_path(":app")
//!     .with_plugins(["com.android.application"])
//!     .with_declaration(DependencyDeclaration::new("implementation", [":core"]))
//!     .build()?;
//!
//! let root = Project::builder()
//!     .with_path(":")
//!     .with_name("demo")
//!     .with_child(app)
//!     .with_child(core)
//!     .build()?;
//!
//! root.validate()?;
//! assert_eq!(root.iter().count(), 3);
//! # Ok(())
//! # }
//! ```

mod types;

pub use types::{Bfs, DependencyDeclaration, Project, ProjectBuilder, ROOT_PATH, child_path};
