use crate::dependency_graph::domain::{DependencyGraph, NodeId};

/// Outcome of one reverse-dependency query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReverseLookup {
    /// The target is in the graph; `dependents` may still be empty
    Found {
        query: String,
        dependents: Vec<NodeId>,
    },
    /// No node in the graph matches the target
    NotFound { query: String, reason: String },
}

impl ReverseLookup {
    pub fn query(&self) -> &str {
        match self {
            ReverseLookup::Found { query, .. } | ReverseLookup::NotFound { query, .. } => query,
        }
    }
}

/// GraphResponse - Internal response DTO from the dependency analysis use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub graph: DependencyGraph,
    /// One entry per requested reverse query, in request order
    pub reverse_lookups: Vec<ReverseLookup>,
}

impl GraphResponse {
    pub fn new(graph: DependencyGraph, reverse_lookups: Vec<ReverseLookup>) -> Self {
        Self {
            graph,
            reverse_lookups,
        }
    }
}
