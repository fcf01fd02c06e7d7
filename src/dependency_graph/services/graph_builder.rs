use crate::dependency_graph::domain::{
    split_package_name, Cycle, DependencyGraph, NodeId, PackageCoordinates, UnresolvedNode,
};
use crate::ports::outbound::{DependencyResolver, ProgressReporter};
use crate::shared::error::GraphError;
use crate::shared::Result;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet, VecDeque};

/// Per-build traversal bookkeeping
///
/// Created fresh by every `build` call and dropped when it returns.
struct Traversal {
    queue: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
    parents: HashMap<NodeId, NodeId>,
    depths: HashMap<NodeId, usize>,
}

impl Traversal {
    fn start_at(root: &NodeId) -> Self {
        let mut traversal = Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            parents: HashMap::new(),
            depths: HashMap::new(),
        };
        traversal.visited.insert(root.clone());
        traversal.depths.insert(root.clone(), 0);
        traversal.queue.push_back(root.clone());
        traversal
    }

    /// Marks `node` visited and queues it; visited-marking happens here, at
    /// enqueue time, so a node is processed at most once.
    fn enqueue(&mut self, node: NodeId, parent: &NodeId, depth: usize) {
        self.visited.insert(node.clone());
        self.parents.insert(node.clone(), parent.clone());
        self.depths.insert(node.clone(), depth);
        self.queue.push_back(node);
    }

    fn depth_of(&self, node: &NodeId) -> usize {
        self.depths.get(node).copied().unwrap_or_default()
    }

    /// Walks the discovered-from chain of `from` looking for `to`
    ///
    /// Returns `to -> ... -> from -> to` when `to` is an ancestor of `from`,
    /// `None` for a cross edge into another branch.
    fn cycle_between(&self, from: &NodeId, to: &NodeId) -> Option<Cycle> {
        let mut path = Vec::new();
        let mut cursor = Some(from);

        while let Some(node) = cursor {
            path.push(node.clone());
            if node == to {
                path.reverse();
                path.push(to.clone());
                return Some(Cycle::new(path));
            }
            cursor = self.parents.get(node);
        }

        None
    }
}

/// GraphBuilder service performing the bounded breadth-first traversal
///
/// Calls the resolver once per discovered node. A failed resolution turns the
/// node into a leaf and is reported as a warning; it never aborts the build.
pub struct GraphBuilder<'a, R, P> {
    resolver: &'a R,
    progress_reporter: &'a P,
}

impl<'a, R, P> GraphBuilder<'a, R, P>
where
    R: DependencyResolver,
    P: ProgressReporter,
{
    pub fn new(resolver: &'a R, progress_reporter: &'a P) -> Self {
        Self {
            resolver,
            progress_reporter,
        }
    }

    /// Builds the dependency graph rooted at `root_package`
    ///
    /// # Arguments
    /// * `root_package` - `group:artifact`, or a bare token used as both
    /// * `root_version` - Root version; `None` lets the resolver decide
    /// * `max_depth` - Edge-count bound from the root (`0` = root only), `None` = unbounded
    ///
    /// # Errors
    /// Returns `GraphError::MalformedPackageReference` if the root reference
    /// cannot be split. Resolution failures are not errors.
    pub fn build(
        &self,
        root_package: &str,
        root_version: Option<&str>,
        max_depth: Option<usize>,
    ) -> Result<DependencyGraph> {
        let (root_group, root_artifact) = split_package_name(root_package)?;
        let root = PackageCoordinates::new(root_group, root_artifact, root_version);
        let root_id = root.id();

        let mut forward: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();
        let mut metadata: IndexMap<NodeId, PackageCoordinates> = IndexMap::new();
        let mut cycles: Vec<Cycle> = Vec::new();
        let mut seen_cycles: HashSet<Cycle> = HashSet::new();
        let mut unresolved: Vec<UnresolvedNode> = Vec::new();

        metadata.insert(root_id.clone(), root);
        let mut traversal = Traversal::start_at(&root_id);
        let mut processed = 0;

        while let Some(current) = traversal.queue.pop_front() {
            let depth = traversal.depth_of(&current);
            processed += 1;

            if max_depth.is_some_and(|max| depth >= max) {
                forward.entry(current).or_default();
                continue;
            }

            let coordinates = metadata.get(&current).cloned().unwrap_or_else(|| {
                PackageCoordinates::new(
                    current.group(),
                    current.artifact(),
                    Some(current.version()),
                )
            });

            self.progress_reporter.report_progress(
                processed,
                traversal.visited.len(),
                Some(&current.to_string()),
            );

            let dependencies = match self.resolver.get_dependencies(
                coordinates.group(),
                coordinates.artifact(),
                coordinates.version(),
            ) {
                Ok(dependencies) => dependencies,
                Err(e) => {
                    let reason = failure_reason(&e);
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to resolve dependencies of {}: {}",
                        current, reason
                    ));
                    forward.entry(current.clone()).or_default();
                    unresolved.push(UnresolvedNode {
                        node: current,
                        reason,
                    });
                    continue;
                }
            };

            forward.entry(current.clone()).or_default();

            for dependency in dependencies {
                let dependency_id = dependency.id();
                metadata.entry(dependency_id.clone()).or_insert(dependency);

                if let Some(edges) = forward.get_mut(&current) {
                    edges.push(dependency_id.clone());
                }

                if traversal.visited.contains(&dependency_id) {
                    if let Some(cycle) = traversal.cycle_between(&current, &dependency_id) {
                        if seen_cycles.insert(cycle.clone()) {
                            cycles.push(cycle);
                        }
                    }
                    continue;
                }

                traversal.enqueue(dependency_id, &current, depth + 1);
            }
        }

        Ok(DependencyGraph::new(root_id, forward, metadata, cycles, unresolved))
    }
}

/// Resolver details without the "Failed to resolve" wrapper the warning adds
fn failure_reason(error: &anyhow::Error) -> String {
    match error.downcast_ref::<GraphError>() {
        Some(GraphError::ResolutionFailure { details, .. }) => details.clone(),
        _ => error.to_string(),
    }
}
