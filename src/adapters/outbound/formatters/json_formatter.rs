use crate::dependency_graph::domain::{DependencyGraph, NodeId};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GraphDocument {
    root: String,
    generated_at: String,
    summary: Summary,
    nodes: Vec<NodeEntry>,
    edges: Vec<EdgeEntry>,
    cycles: Vec<Vec<String>>,
    unresolved: Vec<UnresolvedEntry>,
}

#[derive(Debug, Serialize)]
struct Summary {
    nodes: usize,
    unique_nodes: usize,
    edges: usize,
    cycles: usize,
}

#[derive(Debug, Serialize)]
struct NodeEntry {
    id: String,
    group: String,
    artifact: String,
    version: Option<String>,
    dependencies: Vec<String>,
}

#[derive(Debug, Serialize)]
struct EdgeEntry {
    from: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct UnresolvedEntry {
    id: String,
    reason: String,
}

/// JsonFormatter adapter emitting the whole graph as a JSON document
pub struct JsonFormatter {
    generated_at: Option<DateTime<Utc>>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { generated_at: None }
    }

    /// Pins the `generated_at` timestamp instead of using the current time
    pub fn with_timestamp(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: Some(generated_at),
        }
    }

    fn node_entry(graph: &DependencyGraph, id: &NodeId) -> NodeEntry {
        let (group, artifact, version) = match graph.coordinates(id) {
            Some(coords) => (
                coords.group().to_string(),
                coords.artifact().to_string(),
                coords.version().map(str::to_string),
            ),
            None => (
                id.group().to_string(),
                id.artifact().to_string(),
                id.is_versioned().then(|| id.version().to_string()),
            ),
        };

        NodeEntry {
            id: id.to_string(),
            group,
            artifact,
            version,
            dependencies: graph
                .dependencies_of(id)
                .unwrap_or_default()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        // Every traversed node first, then edge targets that were never traversed
        let mut ids: Vec<&NodeId> = graph.forward().keys().collect();
        ids.extend(graph.metadata().keys().filter(|id| !graph.contains(id)));

        let document = GraphDocument {
            root: graph.root().to_string(),
            generated_at: self.generated_at.unwrap_or_else(Utc::now).to_rfc3339(),
            summary: Summary {
                nodes: graph.node_count(),
                unique_nodes: graph.unique_node_count(),
                edges: graph.edge_count(),
                cycles: graph.cycles().len(),
            },
            nodes: ids.into_iter().map(|id| Self::node_entry(graph, id)).collect(),
            edges: graph
                .forward()
                .iter()
                .flat_map(|(from, targets)| {
                    targets.iter().map(move |to| EdgeEntry {
                        from: from.to_string(),
                        to: to.to_string(),
                    })
                })
                .collect(),
            cycles: graph
                .cycles()
                .iter()
                .map(|cycle| cycle.path().iter().map(ToString::to_string).collect())
                .collect(),
            unresolved: graph
                .unresolved()
                .iter()
                .map(|u| UnresolvedEntry {
                    id: u.node.to_string(),
                    reason: u.reason.clone(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
