use crate::dependency_graph::domain::DependencyGraph;
use crate::shared::Result;

/// GraphFormatter port for turning a built graph into text
///
/// Implementations cover the indented tree view, the Graphviz edge list and
/// the JSON document.
pub trait GraphFormatter {
    /// Formats the dependency graph
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, graph: &DependencyGraph) -> Result<String>;
}
