mod graph_builder;
mod reverse_dependency_analyzer;

pub use graph_builder::GraphBuilder;
pub use reverse_dependency_analyzer::ReverseDependencyAnalyzer;
