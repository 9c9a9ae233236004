//! Png command configuration

use std::time::Duration;

use crate::common::{ConfigBuilder, missing_field};
use crate::config::DotOptions;
use crate::constants::render::{DOT_PROGRAM, DOT_TIMEOUT};
use crate::error::ModgraphError;

#[derive(Debug, Clone)]
pub struct PngOptions {
    pub dot: DotOptions,
    /// Keep the DOT file after a successful conversion
    pub keep_dot: bool,
    pub timeout: Duration,
    pub dot_program: String,
}

impl PngOptions {
    pub fn builder() -> PngOptionsBuilder {
        PngOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct PngOptionsBuilder {
    dot: Option<DotOptions>,
    keep_dot: Option<bool>,
    timeout: Option<Duration>,
    dot_program: Option<String>,
}

impl PngOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dot(mut self, dot: DotOptions) -> Self {
        self.dot = Some(dot);
        self
    }

    pub fn with_keep_dot(mut self, keep_dot: bool) -> Self {
        self.keep_dot = Some(keep_dot);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_dot_program(mut self, dot_program: String) -> Self {
        self.dot_program = Some(dot_program);
        self
    }
}

impl ConfigBuilder for PngOptionsBuilder {
    type Config = PngOptions;

    fn build(self) -> Result<Self::Config, ModgraphError> {
        let timeout = self.timeout.unwrap_or(DOT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ModgraphError::ConfigurationError {
                message: "Conversion timeout must be greater than zero".to_string(),
            });
        }

        let dot_program = self
            .dot_program
            .unwrap_or_else(|| DOT_PROGRAM.to_string());
        if dot_program.trim().is_empty() {
            return Err(ModgraphError::ConfigurationError {
                message: "Graphviz program must not be empty".to_string(),
            });
        }

        Ok(PngOptions {
            dot: self.dot.ok_or_else(|| missing_field("dot"))?,
            keep_dot: self.keep_dot.ok_or_else(|| missing_field("keep_dot"))?,
            timeout,
            dot_program,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn dot_options() -> DotOptions {
        DotOptions::builder()
            .with_root(PathBuf::from("/repo"))
            .with_reset(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = PngOptions::builder()
            .with_dot(dot_options())
            .with_keep_dot(false)
            .build()
            .unwrap();

        assert_eq!(options.timeout, Duration::from_secs(60));
        assert_eq!(options.dot_program, "dot");
        assert!(!options.keep_dot);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = PngOptions::builder()
            .with_dot(dot_options())
            .with_keep_dot(true)
            .with_timeout(Duration::ZERO)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_empty_program_rejected() {
        let result = PngOptions::builder()
            .with_dot(dot_options())
            .with_keep_dot(true)
            .with_dot_program("  ".to_string())
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_dot_options() {
        let err = PngOptions::builder()
            .with_keep_dot(true)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("dot"));
    }
}
