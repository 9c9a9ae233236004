use std::io::Write;

use miette::Result;

use crate::error::ModgraphError;
use crate::graph::ProjectGraph;

/// Fill color for nodes that do not override it
const DEFAULT_NODE_FILL: &str = "#bbbbbb";

// Helper macros for write operations that convert IO errors
macro_rules! write_out {
    ($dst:expr, $($arg:tt)*) => {
        write!($dst, $($arg)*).map_err(ModgraphError::from)
    };
}

macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(ModgraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(ModgraphError::from)
    };
}

/// Writes a [`ProjectGraph`] as Graphviz DOT
///
/// Output depends only on the graph: nodes are written in the graph's sorted
/// order, edges in first-seen order, so equal graphs give identical bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer;

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_dot(&self, graph: &ProjectGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph {{")?;
        writeln_out!(
            output,
            "  graph [label=\"{}\n \",labelloc=t,fontsize=30,ranksep=1.4];",
            escape(graph.title())
        )?;
        writeln_out!(
            output,
            "  node [style=filled, fillcolor=\"{DEFAULT_NODE_FILL}\"];"
        )?;
        writeln_out!(output, "rankdir=TB;")?;

        writeln_out!(output, "\n  # Projects\n")?;
        for node in graph.nodes() {
            writeln_out!(
                output,
                "  \"{}\" [fillcolor=\"{}\"];",
                escape(node.path()),
                node.category().fill_color()
            )?;
        }

        write_out!(output, "\n  {{rank = same;")?;
        for node in graph.nodes().filter(|node| graph.is_root(node.path())) {
            write_out!(output, " \"{}\";", escape(node.path()))?;
        }
        writeln_out!(output, "}}")?;

        writeln_out!(output, "\n  # Dependencies\n")?;
        for (from, to, edge) in graph.edges() {
            write_out!(
                output,
                "  \"{}\" -> \"{}\"",
                escape(from.path()),
                escape(to.path())
            )?;
            if !edge.traits().is_empty() {
                let attributes: Vec<&str> = edge
                    .traits()
                    .iter()
                    .map(|edge_trait| edge_trait.dot_attribute())
                    .collect();
                write_out!(output, " [{}]", attributes.join(", "))?;
            }
            writeln_out!(output)?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Render into memory so a failure never leaves a truncated document
    pub fn render_dot_to_string(&self, graph: &ProjectGraph) -> Result<String> {
        let mut buffer = Vec::new();
        self.render_dot(graph, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            ModgraphError::GraphError {
                message: format!("Rendered graph is not valid UTF-8: {e}"),
            }
            .into()
        })
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
