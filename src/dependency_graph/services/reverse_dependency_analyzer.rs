use crate::dependency_graph::domain::{split_package_name, DependencyGraph, NodeId};
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// ReverseDependencyAnalyzer service answering "who depends on X"
///
/// Pure logic over an already built graph; it reuses the graph's memoized
/// reverse index.
pub struct ReverseDependencyAnalyzer;

impl ReverseDependencyAnalyzer {
    /// Finds every node that reaches the target through forward edges
    ///
    /// The exact `(group, artifact, version)` identity is tried first. If the
    /// graph does not contain it, every node with the same group and artifact
    /// is used instead and their results are merged.
    ///
    /// # Arguments
    /// * `graph` - The built dependency graph
    /// * `target_package` - `group:artifact` or a bare token
    /// * `target_version` - Target version, `None` for the unversioned node
    /// * `max_depth` - Maximum number of reverse hops, `None` = unbounded
    ///
    /// # Returns
    /// The dependents, sorted, excluding the target itself
    ///
    /// # Errors
    /// - `GraphError::MalformedPackageReference` for an unparsable target
    /// - `GraphError::TargetNotFound` when no node matches
    pub fn analyze(
        graph: &DependencyGraph,
        target_package: &str,
        target_version: Option<&str>,
        max_depth: Option<usize>,
    ) -> Result<Vec<NodeId>> {
        let (group, artifact) = split_package_name(target_package)?;
        let target = NodeId::new(&group, &artifact, target_version);
        let index = graph.reverse_index();

        let starts: Vec<&NodeId> = if index.contains(&target) {
            vec![&target]
        } else {
            index.nodes_matching(&group, &artifact)
        };

        if starts.is_empty() {
            return Err(GraphError::TargetNotFound {
                target: target.to_string(),
            }
            .into());
        }

        let dependents: BTreeSet<NodeId> = starts
            .into_iter()
            .flat_map(|start| index.reachable_from(start, max_depth))
            .collect();

        Ok(dependents.into_iter().collect())
    }
}
