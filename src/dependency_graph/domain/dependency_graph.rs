use super::{Cycle, NodeId, PackageCoordinates, ReverseIndex};
use indexmap::{IndexMap, IndexSet};
use std::cell::OnceCell;

/// A node whose dependencies could not be resolved during the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedNode {
    pub node: NodeId,
    pub reason: String,
}

/// DependencyGraph aggregate produced by one graph build
///
/// Holds the forward adjacency (insertion order = discovery order), the
/// metadata table, the recorded cycles and the nodes whose resolution failed.
/// The reverse index is derived lazily on first use; a rebuild produces a new
/// aggregate, so a stale index can never be observed.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: NodeId,
    forward: IndexMap<NodeId, Vec<NodeId>>,
    metadata: IndexMap<NodeId, PackageCoordinates>,
    cycles: Vec<Cycle>,
    unresolved: Vec<UnresolvedNode>,
    reverse_index: OnceCell<ReverseIndex>,
}

impl DependencyGraph {
    pub fn new(
        root: NodeId,
        forward: IndexMap<NodeId, Vec<NodeId>>,
        metadata: IndexMap<NodeId, PackageCoordinates>,
        cycles: Vec<Cycle>,
        unresolved: Vec<UnresolvedNode>,
    ) -> Self {
        Self {
            root,
            forward,
            metadata,
            cycles,
            unresolved,
            reverse_index: OnceCell::new(),
        }
    }

    pub fn root(&self) -> &NodeId {
        &self.root
    }

    pub fn forward(&self) -> &IndexMap<NodeId, Vec<NodeId>> {
        &self.forward
    }

    /// Direct dependencies of `node`, or `None` if the node was never traversed
    pub fn dependencies_of(&self, node: &NodeId) -> Option<&[NodeId]> {
        self.forward.get(node).map(Vec::as_slice)
    }

    pub fn metadata(&self) -> &IndexMap<NodeId, PackageCoordinates> {
        &self.metadata
    }

    pub fn coordinates(&self, node: &NodeId) -> Option<&PackageCoordinates> {
        self.metadata.get(node)
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn unresolved(&self) -> &[UnresolvedNode] {
        &self.unresolved
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.forward.contains_key(node)
    }

    /// Number of traversed nodes (forward graph entries)
    pub fn node_count(&self) -> usize {
        self.forward.len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    /// Distinct nodes appearing anywhere in the graph, as source or target
    pub fn unique_node_count(&self) -> usize {
        let mut nodes: IndexSet<&NodeId> = self.forward.keys().collect();
        nodes.extend(self.forward.values().flatten());
        nodes.len()
    }

    /// Reverse adjacency, computed on first call and reused afterwards
    pub fn reverse_index(&self) -> &ReverseIndex {
        self.reverse_index
            .get_or_init(|| ReverseIndex::from_forward(&self.forward))
    }
}
