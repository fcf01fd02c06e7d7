/// Output format for the built dependency graph
///
/// Shared by the CLI, the configuration file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented tree with cycle report (default)
    #[default]
    Tree,
    /// Graphviz DOT edge list
    Dot,
    /// JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" | "text" => Ok(OutputFormat::Tree),
            "dot" | "gv" | "graphviz" => Ok(OutputFormat::Dot),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'tree', 'dot' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
