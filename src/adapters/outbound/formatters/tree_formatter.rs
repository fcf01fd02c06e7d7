use super::report::render_cycle_report;
use crate::dependency_graph::domain::{DependencyGraph, NodeId};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::collections::HashSet;

const SEPARATOR_WIDTH: usize = 60;

/// TreeFormatter adapter printing the graph as an indented tree
///
/// The walk is depth-first from the root. A node that was already printed is
/// marked `(repeat)` and not expanded again, so cyclic graphs terminate.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn label(graph: &DependencyGraph, node: &NodeId) -> String {
        if graph.unresolved().iter().any(|u| &u.node == node) {
            format!("{} (unresolved)", node)
        } else {
            node.to_string()
        }
    }

    fn render_tree(graph: &DependencyGraph, out: &mut String) {
        let root = graph.root();
        let mut printed: HashSet<&NodeId> = HashSet::from([root]);
        out.push_str(&format!("{}\n", Self::label(graph, root)));

        // (node, prefix for its children, connector already chosen)
        let mut stack: Vec<(&NodeId, String, bool)> = Vec::new();
        Self::push_children(graph, root, "", &mut stack);

        while let Some((node, prefix, is_last)) = stack.pop() {
            let connector = if is_last { "└── " } else { "├── " };

            if !printed.insert(node) {
                out.push_str(&format!("{}{}{} (repeat)\n", prefix, connector, node));
                continue;
            }

            out.push_str(&format!(
                "{}{}{}\n",
                prefix,
                connector,
                Self::label(graph, node)
            ));
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            Self::push_children(graph, node, &child_prefix, &mut stack);
        }
    }

    fn push_children<'g>(
        graph: &'g DependencyGraph,
        node: &NodeId,
        prefix: &str,
        stack: &mut Vec<(&'g NodeId, String, bool)>,
    ) {
        let children = graph.dependencies_of(node).unwrap_or_default();
        for (i, child) in children.iter().enumerate().rev() {
            stack.push((child, prefix.to_string(), i + 1 == children.len()));
        }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TreeFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("Dependency graph for {}\n", graph.root()));
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push('\n');

        Self::render_tree(graph, &mut out);

        out.push('\n');
        out.push_str(&render_cycle_report(graph.cycles()));
        out.push('\n');

        if !graph.unresolved().is_empty() {
            out.push_str(&format!(
                "\nUnresolved packages ({}):\n",
                graph.unresolved().len()
            ));
            for unresolved in graph.unresolved() {
                out.push_str(&format!("  - {}: {}\n", unresolved.node, unresolved.reason));
            }
        }

        out.push_str(&format!(
            "\nTotal unique nodes: {}\n",
            graph.unique_node_count()
        ));
        Ok(out)
    }
}
