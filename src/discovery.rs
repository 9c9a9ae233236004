use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use miette::{Result, WrapErr};
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::common::ConfigBuilder;
use crate::constants::discovery::{MANIFEST_FILE, SKIPPED_DIRS};
use crate::error::ModgraphError;
use crate::manifest::ModuleManifest;
use crate::progress::ProgressReporter;
use crate::project::{Project, ROOT_PATH, child_path};

/// Builds a [`Project`] tree from the `module.toml` files below a directory
///
/// The directory layout is the project hierarchy: `app/module.toml` becomes
/// `:app`, `libs/ui/module.toml` becomes `:libs:ui`. Directories between the
/// root and a manifest become container projects without plugins or
/// dependencies.
#[derive(Debug, Default)]
pub struct ProjectDiscovery;

/// A directory in the project hierarchy, before paths are assigned
#[derive(Debug, Default)]
struct DirNode {
    manifest: Option<ModuleManifest>,
    children: BTreeMap<String, DirNode>,
}

impl DirNode {
    fn insert(&mut self, components: &[String], manifest: ModuleManifest) {
        match components.split_first() {
            None => self.manifest = Some(manifest),
            Some((head, rest)) => self
                .children
                .entry(head.clone())
                .or_default()
                .insert(rest, manifest),
        }
    }

    fn into_project(self, path: String, name: String) -> Result<Project, ModgraphError> {
        let mut children = Vec::with_capacity(self.children.len());
        for (dir_name, child) in self.children {
            let child_name = child
                .manifest
                .as_ref()
                .and_then(ModuleManifest::name)
                .map(str::to_string)
                .unwrap_or(dir_name);
            children.push(child.into_project(child_path(&path, &child_name), child_name)?);
        }

        let builder = Project::builder()
            .with_path(path)
            .with_name(name)
            .with_children(children);
        let builder = match self.manifest {
            Some(manifest) => builder
                .with_plugins(manifest.plugins().iter().cloned())
                .with_declarations(manifest.declarations()),
            None => builder,
        };
        builder.build()
    }
}

impl ProjectDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Discover the project tree rooted at `root`
    pub fn discover(
        &self,
        root: &Path,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Project> {
        if !root.is_dir() {
            return Err(ModgraphError::ConfigurationError {
                message: format!("Project root '{}' is not a directory", root.display()),
            }
            .into());
        }

        if let Some(p) = progress.as_deref_mut() {
            p.start_discovery(root);
        }

        let manifest_paths = find_manifests(root);
        let reporter = progress.as_deref();
        let manifests: Vec<(Vec<String>, ModuleManifest)> = manifest_paths
            .par_iter()
            .map(|path| -> Result<(Vec<String>, ModuleManifest)> {
                if let Some(p) = reporter {
                    p.checking_manifest(path);
                }
                let manifest = ModuleManifest::parse_file(path)
                    .wrap_err_with(|| format!("Failed to load '{}'", path.display()))?;
                Ok((relative_components(root, path), manifest))
            })
            .collect::<Result<_>>()?;

        let mut tree = DirNode::default();
        for (components, manifest) in manifests {
            tree.insert(&components, manifest);
        }

        let root_name = tree
            .manifest
            .as_ref()
            .and_then(ModuleManifest::name)
            .map(str::to_string)
            .unwrap_or_else(|| directory_name(root));
        let project = tree
            .into_project(ROOT_PATH.to_string(), root_name)
            .wrap_err("Failed to assemble project tree")?;

        if let Some(p) = progress.as_deref_mut() {
            p.finish_discovery(project.iter().count());
        }

        project
            .validate()
            .wrap_err("Project tree has invalid dependencies")?;

        Ok(project)
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|skipped| name == *skipped)
}

/// Manifest files below `root`, sorted by path
fn find_manifests(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == MANIFEST_FILE)
        .map(|e| e.into_path())
        .collect();
    paths.sort();
    paths
}

/// Directory components between `root` and the manifest's directory
fn relative_components(root: &Path, manifest: &Path) -> Vec<String> {
    manifest
        .parent()
        .and_then(|dir| dir.strip_prefix(root).ok())
        .map(|relative| {
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn directory_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| ROOT_PATH.to_string())
}
