//! Project tree types

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use crate::common::{ConfigBuilder, missing_field};
use crate::error::ModgraphError;

/// Path of the structural root project
pub const ROOT_PATH: &str = ":";

/// Path of the child `name` below the project at `parent`
pub fn child_path(parent: &str, name: &str) -> String {
    if parent == ROOT_PATH {
        format!(":{name}")
    } else {
        format!("{parent}:{name}")
    }
}

/// A named dependency configuration and the projects it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    configuration: String,
    targets: Vec<String>,
}

impl DependencyDeclaration {
    pub fn new<I, S>(configuration: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            configuration: configuration.into(),
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }
}

/// A project in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    path: String,
    name: String,
    plugins: BTreeSet<String>,
    declarations: Vec<DependencyDeclaration>,
    children: BTreeMap<String, Project>,
}

impl Project {
    pub fn builder() -> ProjectBuilder {
        ProjectBuilder::new()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plugins(&self) -> &BTreeSet<String> {
        &self.plugins
    }

    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.contains(id)
    }

    pub fn declarations(&self) -> &[DependencyDeclaration] {
        &self.declarations
    }

    pub fn children(&self) -> &BTreeMap<String, Project> {
        &self.children
    }

    /// Breadth-first iteration over this project and all of its descendants
    pub fn iter(&self) -> Bfs<'_> {
        Bfs {
            queue: VecDeque::from([self]),
        }
    }

    /// Look up a project anywhere in this subtree by path
    pub fn find(&self, path: &str) -> Option<&Project> {
        self.iter().find(|project| project.path == path)
    }

    /// Check that project paths are unique and that every dependency target
    /// names a project in the tree
    pub fn validate(&self) -> Result<(), ModgraphError> {
        let mut paths = HashSet::new();
        for project in self.iter() {
            if !paths.insert(project.path.as_str()) {
                return Err(ModgraphError::ConfigurationError {
                    message: format!("Duplicate project path '{}'", project.path),
                });
            }
        }

        for project in self.iter() {
            for declaration in &project.declarations {
                if let Some(unknown) = declaration
                    .targets
                    .iter()
                    .find(|target| !paths.contains(target.as_str()))
                {
                    return Err(ModgraphError::UnknownProject {
                        path: unknown.clone(),
                        referenced_by: project.path.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Project {
    type Item = &'a Project;
    type IntoIter = Bfs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Breadth-first walk over a project tree, children in name order
pub struct Bfs<'a> {
    queue: VecDeque<&'a Project>,
}

impl<'a> Iterator for Bfs<'a> {
    type Item = &'a Project;

    fn next(&mut self) -> Option<Self::Item> {
        let project = self.queue.pop_front()?;
        self.queue.extend(project.children.values());
        Some(project)
    }
}

#[derive(Default)]
pub struct ProjectBuilder {
    path: Option<String>,
    name: Option<String>,
    plugins: BTreeSet<String>,
    declarations: Vec<DependencyDeclaration>,
    children: Vec<Project>,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Display name; defaults to the last segment of the path
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_plugins<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins.extend(plugins.into_iter().map(Into::into));
        self
    }

    pub fn with_declaration(mut self, declaration: DependencyDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn with_declarations(mut self, declarations: Vec<DependencyDeclaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    pub fn with_child(mut self, child: Project) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Project>) -> Self {
        self.children.extend(children);
        self
    }
}

impl ConfigBuilder for ProjectBuilder {
    type Config = Project;

    fn build(self) -> Result<Self::Config, ModgraphError> {
        let path = self.path.ok_or_else(|| missing_field("path"))?;
        let name = match self.name {
            Some(name) => name,
            None => path
                .rsplit(':')
                .find(|segment| !segment.is_empty())
                .unwrap_or(ROOT_PATH)
                .to_string(),
        };

        let mut children = BTreeMap::new();
        for child in self.children {
            let child_name = child.name.clone();
            if children.insert(child_name.clone(), child).is_some() {
                return Err(ModgraphError::ConfigurationError {
                    message: format!("Project '{path}' has two children named '{child_name}'"),
                });
            }
        }

        Ok(Project {
            path,
            name,
            plugins: self.plugins,
            declarations: self.declarations,
            children,
        })
    }
}
