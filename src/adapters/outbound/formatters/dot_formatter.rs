use crate::dependency_graph::domain::{DependencyGraph, NodeId};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// DotFormatter adapter serializing the forward edges as a Graphviz digraph
///
/// One `"source" -> "target";` line per edge, in forward-graph insertion
/// order. Node identities are written as opaque quoted strings.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(node: &NodeId) -> String {
        let escaped = node.to_string().replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        let mut out = String::from("digraph dependencies {\n");
        for (source, targets) in graph.forward() {
            for target in targets {
                out.push_str(&format!(
                    "    {} -> {};\n",
                    Self::quote(source),
                    Self::quote(target)
                ));
            }
        }
        out.push_str("}\n");
        Ok(out)
    }
}
