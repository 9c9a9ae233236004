//! Configuration constants for modgraph
//!
//! This module contains the defaults used throughout the application. Most of
//! them can be overridden through command line flags or environment
//! variables.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while manifests are discovered
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Manifest discovery configuration
pub mod discovery {
    /// File name of a module manifest
    pub const MANIFEST_FILE: &str = "module.toml";

    /// Directories that never contain module manifests. Hidden directories
    /// are skipped as well. Modules may not live in directories with these
    /// names.
    pub const SKIPPED_DIRS: &[&str] = &["build", "target", "node_modules"];
}

/// Output file configuration
pub mod output {
    /// Location of the DOT file relative to the project root
    pub const DEFAULT_GRAPH_PATH: &str = "graphs/dependency-graph/project.dot";
}

/// External rendering configuration
pub mod render {
    use super::*;

    /// Graphviz program invoked for raster conversion
    pub const DOT_PROGRAM: &str = "dot";

    /// Output format passed to `-T`
    pub const RASTER_FORMAT: &str = "png";

    /// Ceiling on how long the conversion may run
    pub const DOT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Interval between checks on the conversion process
    pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }

    #[test]
    fn test_render_constants() {
        assert_eq!(render::DOT_TIMEOUT, Duration::from_secs(60));
        assert!(render::POLL_INTERVAL < render::DOT_TIMEOUT);
    }
}
