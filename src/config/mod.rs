//! # Configuration Module
//!
//! Configuration structures for the modgraph commands. Each command has its
//! own config module with a builder.
//!
//! - **DotOptions**: Configuration for the `dot` command
//! - **PngOptions**: Configuration for the `png` command, which wraps
//!   [`DotOptions`] with the raster conversion settings
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use modgraph::common::ConfigBuilder;
//! use modgraph::config::{DotOptions, PngOptions};
//!
//! let dot = DotOptions::builder()
//!     .with_root("/path/to/project".into())
//!     .with_reset(true)
//!     .build()
//!     .unwrap();
//!
//! let png = PngOptions::builder()
//!     .with_dot(dot)
//!     .with_keep_dot(false)
//!     .with_timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(png.dot_program, "dot");
//! ```

pub mod dot;
pub mod png;

pub use dot::DotOptions;
pub use png::PngOptions;
