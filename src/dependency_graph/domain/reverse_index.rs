use super::NodeId;
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Inverted adjacency of a forward dependency graph
///
/// For every forward edge `a -> b` the index records `b -> a`. Every node with
/// a forward entry also has a (possibly empty) reverse entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    dependents: IndexMap<NodeId, BTreeSet<NodeId>>,
}

impl ReverseIndex {
    pub fn from_forward(forward: &IndexMap<NodeId, Vec<NodeId>>) -> Self {
        let mut dependents: IndexMap<NodeId, BTreeSet<NodeId>> = forward
            .keys()
            .map(|node| (node.clone(), BTreeSet::new()))
            .collect();

        for (source, targets) in forward {
            for target in targets {
                dependents
                    .entry(target.clone())
                    .or_default()
                    .insert(source.clone());
            }
        }

        Self { dependents }
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.dependents.contains_key(node)
    }

    /// Packages listing `node` as a direct dependency
    pub fn direct_dependents(&self, node: &NodeId) -> Option<&BTreeSet<NodeId>> {
        self.dependents.get(node)
    }

    /// All indexed nodes with the given group and artifact, any version
    pub fn nodes_matching(&self, group: &str, artifact: &str) -> Vec<&NodeId> {
        self.dependents
            .keys()
            .filter(|node| node.matches_package(group, artifact))
            .collect()
    }

    /// Breadth-first walk over reverse edges starting at `start`
    ///
    /// Nodes at a hop distance of `max_depth` or more are not expanded. The
    /// start node itself is never part of the result, even on a cycle.
    pub fn reachable_from(&self, start: &NodeId, max_depth: Option<usize>) -> BTreeSet<NodeId> {
        let mut reached = BTreeSet::new();
        let mut visited: HashSet<&NodeId> = HashSet::from([start]);
        let mut queue: VecDeque<(&NodeId, usize)> = VecDeque::from([(start, 0)]);

        while let Some((current, depth)) = queue.pop_front() {
            if max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            let Some(parents) = self.dependents.get(current) else {
                continue;
            };

            for parent in parents {
                if visited.insert(parent) {
                    reached.insert(parent.clone());
                    queue.push_back((parent, depth + 1));
                }
            }
        }

        reached
    }
}
