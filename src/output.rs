//! Output file lifecycle
//!
//! [`GraphFile::provide`] makes sure the target file exists before anything
//! is written, optionally clearing a previous run's file first.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::constants::output::DEFAULT_GRAPH_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFile {
    path: PathBuf,
}

impl GraphFile {
    /// `graphs/dependency-graph/project.dot` below the project root
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(DEFAULT_GRAPH_PATH)
    }

    /// Create the file (and missing parent directories) if it does not
    /// exist. An existing file is deleted and recreated empty when `reset` is
    /// set, and left alone otherwise.
    pub fn provide(path: impl Into<PathBuf>, reset: bool) -> Result<Self> {
        let path = path.into();

        if path.exists() {
            if reset {
                fs::remove_file(&path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to delete '{}'", path.display()))?;
                create(&path)?;
            }
        } else {
            create(&path)?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file's contents with `contents`
    pub fn write_all(&self, contents: &[u8]) -> Result<()> {
        let file = File::create(&self.path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to open '{}' for writing", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents)
            .and_then(|()| writer.flush())
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write '{}'", self.path.display()))
    }

    pub fn remove(self) -> Result<()> {
        fs::remove_file(&self.path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to delete '{}'", self.path.display()))
    }
}

fn create(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    File::create(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to create '{}'", path.display()))?;
    Ok(())
}
