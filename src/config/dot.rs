//! Dot command configuration

use std::path::PathBuf;

use crate::common::{ConfigBuilder, missing_field};
use crate::error::ModgraphError;
use crate::output::GraphFile;

#[derive(Debug, Clone)]
pub struct DotOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub reset: bool,
    pub title: Option<String>,
}

impl DotOptions {
    pub fn builder() -> DotOptionsBuilder {
        DotOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct DotOptionsBuilder {
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    reset: Option<bool>,
    title: Option<String>,
}

impl DotOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    /// Defaults to the standard graph location below the root
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = Some(reset);
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

impl ConfigBuilder for DotOptionsBuilder {
    type Config = DotOptions;

    fn build(self) -> Result<Self::Config, ModgraphError> {
        let root = self.root.ok_or_else(|| missing_field("root"))?;
        let output = self
            .output
            .unwrap_or_else(|| GraphFile::default_path(&root));

        Ok(DotOptions {
            root,
            output,
            reset: self.reset.ok_or_else(|| missing_field("reset"))?,
            title: self.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults_below_root() {
        let options = DotOptions::builder()
            .with_root(PathBuf::from("/repo"))
            .with_reset(true)
            .build()
            .unwrap();

        assert_eq!(
            options.output,
            PathBuf::from("/repo/graphs/dependency-graph/project.dot")
        );
        assert!(options.title.is_none());
    }

    #[test]
    fn test_explicit_output() {
        let options = DotOptions::builder()
            .with_root(PathBuf::from("/repo"))
            .with_output(Some(PathBuf::from("/tmp/graph.dot")))
            .with_reset(false)
            .with_title(Some("Demo".to_string()))
            .build()
            .unwrap();

        assert_eq!(options.output, PathBuf::from("/tmp/graph.dot"));
        assert!(!options.reset);
        assert_eq!(options.title.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_missing_root() {
        let err = DotOptions::builder().with_reset(true).build().unwrap_err();
        assert!(err.to_string().contains("root"));
    }

    #[test]
    fn test_missing_reset() {
        let err = DotOptions::builder()
            .with_root(PathBuf::from("/repo"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("reset"));
    }
}
