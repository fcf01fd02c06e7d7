/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: package repositories,
/// console reporting, formatters, writers and the Graphviz renderer.
pub mod outbound;
