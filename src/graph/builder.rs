use std::collections::{BTreeSet, HashMap, HashSet};

use miette::{Result, WrapErr};
use petgraph::graph::{DiGraph, NodeIndex};

use super::classify::Classifier;
use super::policy::{SuffixTraitRule, TraitPolicy};
use super::types::{Category, DependencyEdge, EdgeTrait, ProjectGraph, ProjectNode};
use crate::error::ModgraphError;
use crate::project::Project;

/// Every project in the tree in breadth-first order. Each one starts out as a
/// root candidate.
pub fn discover_projects(root: &Project) -> Vec<String> {
    root.iter().map(|project| project.path().to_string()).collect()
}

/// Nodes, merged edges and categories gathered from one walk over the tree
#[derive(Debug, Clone, Default)]
pub struct EdgeCollection {
    nodes: HashSet<String>,
    edges: Vec<((String, String), BTreeSet<EdgeTrait>)>,
    edge_positions: HashMap<(String, String), usize>,
    targets: HashSet<String>,
    categories: HashMap<String, Category>,
}

impl EdgeCollection {
    pub fn nodes(&self) -> &HashSet<String> {
        &self.nodes
    }

    /// Edges keyed by (source, target), in first-seen order
    pub fn edges(&self) -> &[((String, String), BTreeSet<EdgeTrait>)] {
        &self.edges
    }

    /// Every project some declaration points at, self-references included
    pub fn targets(&self) -> &HashSet<String> {
        &self.targets
    }

    pub fn category(&self, path: &str) -> Category {
        self.categories
            .get(path)
            .copied()
            .unwrap_or(Category::None)
    }

    fn add_node(&mut self, path: &str) {
        if !self.nodes.contains(path) {
            self.nodes.insert(path.to_string());
        }
    }

    fn merge_edge(&mut self, from: &str, to: &str, traits: BTreeSet<EdgeTrait>) {
        let key = (from.to_string(), to.to_string());
        match self.edge_positions.get(&key) {
            Some(&position) => self.edges[position].1.extend(traits),
            None => {
                self.edge_positions.insert(key.clone(), self.edges.len());
                self.edges.push((key, traits));
            }
        }
    }
}

/// Walk the tree breadth-first, registering a node for both ends of every
/// declared dependency and merging repeated (source, target) pairs. Each
/// visited project is classified along the way.
pub fn collect_edges(
    root: &Project,
    policy: &dyn TraitPolicy,
    classifier: &Classifier,
) -> EdgeCollection {
    let mut collection = EdgeCollection::default();

    for project in root {
        let from = project.path();

        for declaration in project.declarations() {
            for to in declaration.targets() {
                collection.add_node(from);
                collection.add_node(to);
                collection.targets.insert(to.clone());

                if from == to.as_str() {
                    continue;
                }

                collection.merge_edge(from, to, policy.traits(declaration));
            }
        }

        collection
            .categories
            .insert(from.to_string(), classifier.classify(project.plugins()));
    }

    collection
}

/// Sort the nodes, drop every targeted project from the root candidates and
/// assemble the final graph
pub fn finalize(
    title: impl Into<String>,
    candidates: Vec<String>,
    collection: EdgeCollection,
) -> Result<ProjectGraph, ModgraphError> {
    let mut paths: Vec<&String> = collection.nodes.iter().collect();
    paths.sort();

    let mut graph = DiGraph::with_capacity(paths.len(), collection.edges.len());
    let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(paths.len());
    for path in paths {
        let idx = graph.add_node(ProjectNode::new(path.as_str(), collection.category(path)));
        indices.insert(path.as_str(), idx);
    }

    for ((from, to), traits) in &collection.edges {
        let from_idx = indices
            .get(from.as_str())
            .ok_or_else(|| ModgraphError::GraphError {
                message: format!("Edge source '{from}' is not a registered node"),
            })?;
        let to_idx = indices
            .get(to.as_str())
            .ok_or_else(|| ModgraphError::GraphError {
                message: format!("Edge target '{to}' is not a registered node"),
            })?;
        graph.add_edge(*from_idx, *to_idx, DependencyEdge::new(traits.clone()));
    }

    let roots = candidates
        .into_iter()
        .filter(|path| !collection.targets.contains(path))
        .collect();

    Ok(ProjectGraph::new(title.into(), graph, roots))
}

/// Builder for constructing project dependency graphs
///
/// Runs the discovery walk, the edge collection walk and finalization over a
/// project tree. The trait policy and classifier can be swapped to change
/// how edges are styled and nodes are colored.
pub struct DependencyGraphBuilder {
    classifier: Classifier,
    policy: Box<dyn TraitPolicy>,
    title: Option<String>,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::default(),
            policy: Box::new(SuffixTraitRule::implementation()),
            title: None,
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_trait_policy(mut self, policy: impl TraitPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Graph label; defaults to the root project's name
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn build(&self, root: &Project) -> Result<ProjectGraph> {
        let candidates = discover_projects(root);
        let collection = collect_edges(root, &*self.policy, &self.classifier);
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| root.name().to_string());

        finalize(title, candidates, collection).wrap_err("Failed to assemble project graph")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::graph::CategoryRule;
    use crate::project::{DependencyDeclaration, ROOT_PATH};

    fn project(path: &str, declarations: Vec<DependencyDeclaration>) -> Project {
        Project::builder()
            .with_path(path)
            .with_declarations(declarations)
            .build()
            .unwrap()
    }

    fn dep(configuration: &str, targets: &[&str]) -> DependencyDeclaration {
        DependencyDeclaration::new(configuration, targets.iter().copied())
    }

    fn tree(children: Vec<Project>) -> Project {
        Project::builder()
            .with_path(ROOT_PATH)
            .with_name("demo")
            .with_children(children)
            .build()
            .unwrap()
    }

    fn edge_list(graph: &ProjectGraph) -> Vec<(String, String, bool)> {
        graph
            .edges()
            .map(|(from, to, edge)| (from.path().to_string(), to.path().to_string(), edge.is_weak()))
            .collect()
    }

    #[test]
    fn test_discover_projects_bfs() {
        let libs = Project::builder()
            .with_path(":libs")
            .with_child(project(":libs:ui", vec![]))
            .build()
            .unwrap();
        let root = tree(vec![libs, project(":app", vec![])]);

        assert_eq!(
            discover_projects(&root),
            vec![":", ":app", ":libs", ":libs:ui"]
        );
    }

    #[test]
    fn test_app_core_ui_example() {
        let root = tree(vec![
            project(
                ":app",
                vec![dep("implementation", &[":core"]), dep("api", &[":ui"])],
            ),
            project(":core", vec![]),
            project(":ui", vec![dep("implementation", &[":core"])]),
        ]);

        let graph = DependencyGraphBuilder::new().build(&root).unwrap();

        let nodes: Vec<&str> = graph.nodes().map(ProjectNode::path).collect();
        assert_eq!(nodes, vec![":app", ":core", ":ui"]);
        assert!(graph.is_root(":app"));
        assert!(!graph.is_root(":core"));
        assert!(!graph.is_root(":ui"));
        assert_eq!(
            edge_list(&graph),
            vec![
                (":app".to_string(), ":core".to_string(), true),
                (":app".to_string(), ":ui".to_string(), false),
                (":ui".to_string(), ":core".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_self_dependency_is_node_but_not_edge() {
        let root = tree(vec![project(":app", vec![dep("api", &[":app"])])]);

        let graph = DependencyGraphBuilder::new().build(&root).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node(":app").is_some());
    }

    #[test]
    fn test_duplicate_declarations_merge_traits() {
        let root = tree(vec![
            project(
                ":app",
                vec![
                    dep("api", &[":core"]),
                    dep("testImplementation", &[":core"]),
                    dep("compileOnly", &[":core"]),
                ],
            ),
            project(":core", vec![]),
        ]);

        let graph = DependencyGraphBuilder::new().build(&root).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edge(":app", ":core").unwrap().is_weak());
    }

    #[test]
    fn test_strong_only_declarations_stay_solid() {
        let root = tree(vec![
            project(":app", vec![dep("api", &[":core", ":core"])]),
            project(":core", vec![]),
        ]);

        let graph = DependencyGraphBuilder::new().build(&root).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.edge(":app", ":core").unwrap().is_weak());
    }

    #[test]
    fn test_dependency_cycles_terminate() {
        let root = tree(vec![
            project(":a", vec![dep("api", &[":b"])]),
            project(":b", vec![dep("api", &[":a"])]),
        ]);

        let graph = DependencyGraphBuilder::new().build(&root).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_root(":a"));
        assert!(!graph.is_root(":b"));
        // The structural root declares nothing and nothing targets it
        assert!(graph.is_root(":"));
        assert!(graph.node(":").is_none());
    }

    #[test]
    fn test_structural_root_loses_root_status_when_targeted() {
        let root = Project::builder()
            .with_path(ROOT_PATH)
            .with_child(project(":app", vec![dep("implementation", &[":"])]))
            .build()
            .unwrap();

        let graph = DependencyGraphBuilder::new().build(&root).unwrap();

        assert!(!graph.is_root(":"));
        assert!(graph.is_root(":app"));
        assert_eq!(
            graph.nodes().map(ProjectNode::path).collect::<Vec<_>>(),
            vec![":", ":app"]
        );
    }

    #[test]
    fn test_edges_keep_first_seen_order() {
        let root = tree(vec![
            project(":a", vec![dep("api", &[":z", ":m"])]),
            project(":b", vec![dep("api", &[":a"])]),
            project(":m", vec![]),
            project(":z", vec![dep("implementation", &[":m"])]),
        ]);

        let graph = DependencyGraphBuilder::new().build(&root).unwrap();

        let pairs: Vec<(String, String)> = edge_list(&graph)
            .into_iter()
            .map(|(from, to, _)| (from, to))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (":a".to_string(), ":z".to_string()),
                (":a".to_string(), ":m".to_string()),
                (":b".to_string(), ":a".to_string()),
                (":z".to_string(), ":m".to_string()),
            ]
        );
    }

    #[test]
    fn test_nodes_classified() {
        let app = Project::builder()
            .with_path(":app")
            .with_plugins(["java-library", "org.jetbrains.kotlin.multiplatform"])
            .with_declaration(dep("api", &[":core"]))
            .build()
            .unwrap();
        let core = Project::builder()
            .with_path(":core")
            .with_plugins(["java"])
            .build()
            .unwrap();

        let graph = DependencyGraphBuilder::new()
            .build(&tree(vec![app, core]))
            .unwrap();

        assert_eq!(
            graph.node(":app").unwrap().category(),
            Category::Multiplatform
        );
        assert_eq!(
            graph.node(":core").unwrap().category(),
            Category::GenericManaged
        );
    }

    #[test]
    fn test_custom_classifier_and_policy() {
        let app = Project::builder()
            .with_path(":app")
            .with_plugins(["swift"])
            .with_declaration(dep("kapt", &[":core"]))
            .build()
            .unwrap();
        let root = tree(vec![app, project(":core", vec![])]);

        let graph = DependencyGraphBuilder::new()
            .with_classifier(Classifier::new(vec![CategoryRule::new(
                Category::MobilePlatform,
                ["swift"],
            )]))
            .with_trait_policy(SuffixTraitRule::new("KAPT", EdgeTrait::Weak))
            .build(&root)
            .unwrap();

        assert_eq!(
            graph.node(":app").unwrap().category(),
            Category::MobilePlatform
        );
        assert!(graph.edge(":app", ":core").unwrap().is_weak());
    }

    #[test]
    fn test_title_defaults_to_root_name() {
        let root = tree(vec![]);
        assert_eq!(DependencyGraphBuilder::new().build(&root).unwrap().title(), "demo");

        let titled = DependencyGraphBuilder::new()
            .with_title(Some("Modules".to_string()))
            .build(&root)
            .unwrap();
        assert_eq!(titled.title(), "Modules");
    }

    #[test]
    fn test_finalize_rejects_unregistered_edge_endpoint() {
        let mut collection = EdgeCollection::default();
        collection.add_node(":a");
        collection.merge_edge(":a", ":ghost", BTreeSet::new());

        let err = finalize("t", vec![], collection).unwrap_err();
        assert!(err.to_string().contains(":ghost"));
    }
}
