//! Core graph types
//!
//! This module contains the fundamental data structures used in the project
//! dependency graph.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};

/// Visual classification of a project, derived from the plugins it applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Multiplatform,
    ScriptTarget,
    MobilePlatform,
    GenericManaged,
    None,
}

impl Category {
    /// All categories in precedence order
    pub const ALL: [Category; 5] = [
        Category::Multiplatform,
        Category::ScriptTarget,
        Category::MobilePlatform,
        Category::GenericManaged,
        Category::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Multiplatform => "multiplatform",
            Category::ScriptTarget => "script-target",
            Category::MobilePlatform => "mobile-platform",
            Category::GenericManaged => "generic-managed",
            Category::None => "none",
        }
    }

    /// Fill color used for nodes of this category
    pub fn fill_color(self) -> &'static str {
        match self {
            Category::Multiplatform => "#ffd2b3",
            Category::ScriptTarget => "#ffffba",
            Category::MobilePlatform => "#baffc9",
            Category::GenericManaged => "#ffb3ba",
            Category::None => "#eeeeee",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style annotation carried by a dependency edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeTrait {
    /// Implementation-only dependency, not exposed to the dependent's
    /// consumers
    Weak,
}

impl EdgeTrait {
    /// DOT attribute emitted for this trait
    pub fn dot_attribute(self) -> &'static str {
        match self {
            EdgeTrait::Weak => "style=dotted",
        }
    }
}

/// A project in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    path: String,
    category: Category,
}

impl ProjectNode {
    pub fn new(path: impl Into<String>, category: Category) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// A merged dependency between two distinct projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyEdge {
    traits: BTreeSet<EdgeTrait>,
}

impl DependencyEdge {
    pub fn new(traits: BTreeSet<EdgeTrait>) -> Self {
        Self { traits }
    }

    pub fn traits(&self) -> &BTreeSet<EdgeTrait> {
        &self.traits
    }

    pub fn is_weak(&self) -> bool {
        self.traits.contains(&EdgeTrait::Weak)
    }
}

/// The finished graph: nodes sorted by path, edges in first-seen order
#[derive(Debug, Clone)]
pub struct ProjectGraph {
    title: String,
    graph: DiGraph<ProjectNode, DependencyEdge>,
    indices: HashMap<String, NodeIndex>,
    roots: Vec<String>,
}

impl ProjectGraph {
    /// Wrap a graph whose nodes are already sorted by path and whose edges
    /// were added in first-seen order
    pub fn new(
        title: String,
        graph: DiGraph<ProjectNode, DependencyEdge>,
        roots: Vec<String>,
    ) -> Self {
        let indices = graph
            .node_indices()
            .map(|idx| (graph[idx].path.clone(), idx))
            .collect();
        Self {
            title,
            graph,
            indices,
            roots,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Nodes in ascending path order
    pub fn nodes(&self) -> impl Iterator<Item = &ProjectNode> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    pub fn node(&self, path: &str) -> Option<&ProjectNode> {
        self.indices.get(path).map(|&idx| &self.graph[idx])
    }

    /// Edges in the order their (source, target) pair was first seen
    pub fn edges(&self) -> impl Iterator<Item = (&ProjectNode, &ProjectNode, &DependencyEdge)> {
        self.graph.edge_indices().filter_map(|idx| {
            let (source, target) = self.graph.edge_endpoints(idx)?;
            Some((&self.graph[source], &self.graph[target], &self.graph[idx]))
        })
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&DependencyEdge> {
        let from = *self.indices.get(from)?;
        let to = *self.indices.get(to)?;
        self.graph
            .find_edge(from, to)
            .map(|idx| &self.graph[idx])
    }

    /// Projects no declaration targets, in breadth-first discovery order.
    /// Includes projects that are not graph nodes at all.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn is_root(&self, path: &str) -> bool {
        self.roots.iter().any(|root| root == path)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_are_distinct() {
        let colors: BTreeSet<&str> = Category::ALL.iter().map(|c| c.fill_color()).collect();
        assert_eq!(colors.len(), Category::ALL.len());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::ScriptTarget.to_string(), "script-target");
        assert_eq!(Category::None.to_string(), "none");
    }

    #[test]
    fn test_edge_weak() {
        assert!(!DependencyEdge::default().is_weak());
        assert!(DependencyEdge::new(BTreeSet::from([EdgeTrait::Weak])).is_weak());
    }

    #[test]
    fn test_project_graph_lookup() {
        let mut graph = DiGraph::new();
        let app = graph.add_node(ProjectNode::new(":app", Category::None));
        let core = graph.add_node(ProjectNode::new(":core", Category::GenericManaged));
        graph.add_edge(app, core, DependencyEdge::default());

        let graph = ProjectGraph::new("demo".to_string(), graph, vec![":app".to_string()]);

        assert_eq!(graph.title(), "demo");
        assert_eq!(
            graph.node(":core").map(ProjectNode::category),
            Some(Category::GenericManaged)
        );
        assert!(graph.edge(":app", ":core").is_some());
        assert!(graph.edge(":core", ":app").is_none());
        assert!(graph.is_root(":app"));
        assert!(!graph.is_root(":core"));
    }
}
