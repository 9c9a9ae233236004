use std::collections::BTreeMap;
use std::path::Path;

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::error::ModgraphError;
use crate::project::DependencyDeclaration;

/// Contents of a `module.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleManifest {
    #[serde(default)]
    pub project: ProjectSection,
    /// Configuration name to the project paths it depends on. Sorted by
    /// configuration name.
    #[serde(default)]
    pub dependencies: BTreeMap<String, Targets>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    pub name: Option<String>,
    #[serde(default)]
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Targets {
    Single(String),
    Many(Vec<String>),
}

impl Targets {
    pub fn paths(&self) -> &[String] {
        match self {
            Targets::Single(path) => std::slice::from_ref(path),
            Targets::Many(paths) => paths,
        }
    }
}

impl ModuleManifest {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ModgraphError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::parse_str(&content, &path.display().to_string())?)
    }

    pub fn parse_str(content: &str, file: &str) -> Result<Self, ModgraphError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            ModgraphError::TomlParseError(Box::new(crate::error::TomlParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.project.name.as_deref()
    }

    pub fn plugins(&self) -> &[String] {
        &self.project.plugins
    }

    /// One declaration per configuration, in configuration name order
    pub fn declarations(&self) -> Vec<DependencyDeclaration> {
        self.dependencies
            .iter()
            .map(|(configuration, targets)| {
                DependencyDeclaration::new(configuration.as_str(), targets.paths().iter().cloned())
            })
            .collect()
    }
}
