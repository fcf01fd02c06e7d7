use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, TreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use maven_depgraph::application::dto::OutputFormat;
    /// use maven_depgraph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Dot);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::Tree => Box::new(TreeFormatter::new()),
            OutputFormat::Dot => Box::new(DotFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use maven_depgraph::application::dto::OutputFormat;
    /// use maven_depgraph::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Tree => "📝 Generating dependency tree...",
            OutputFormat::Dot => "📝 Generating Graphviz DOT output...",
            OutputFormat::Json => "📝 Generating JSON output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::NodeId;
    use crate::dependency_graph::domain::DependencyGraph;
    use indexmap::IndexMap;

    fn single_edge_graph() -> DependencyGraph {
        let a = NodeId::new("A", "A", None);
        let b = NodeId::new("B", "B", Some("1.0.0"));
        let mut forward = IndexMap::new();
        forward.insert(a.clone(), vec![b.clone()]);
        forward.insert(b, vec![]);
        DependencyGraph::new(a, forward, IndexMap::new(), vec![], vec![])
    }

    #[test]
    fn test_create_tree_formatter() {
        let output = FormatterFactory::create(OutputFormat::Tree)
            .format(&single_edge_graph())
            .unwrap();
        assert!(output.contains("└── B:B:1.0.0"));
    }

    #[test]
    fn test_create_dot_formatter() {
        let output = FormatterFactory::create(OutputFormat::Dot)
            .format(&single_edge_graph())
            .unwrap();
        assert!(output.starts_with("digraph dependencies {"));
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&single_edge_graph())
            .unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Tree),
            "📝 Generating dependency tree..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Dot),
            "📝 Generating Graphviz DOT output..."
        );
    }
}
