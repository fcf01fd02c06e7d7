use crate::application::dto::{GraphRequest, GraphResponse, ReverseLookup, ReverseQuery};
use crate::dependency_graph::domain::DependencyGraph;
use crate::dependency_graph::services::{GraphBuilder, ReverseDependencyAnalyzer};
use crate::ports::outbound::{DependencyResolver, ProgressReporter};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// AnalyzeDependenciesUseCase - builds the graph and answers reverse queries
///
/// # Type Parameters
/// * `R` - DependencyResolver implementation (fixture file or Maven repository)
/// * `P` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<R, P> {
    resolver: R,
    progress_reporter: P,
}

impl<R, P> AnalyzeDependenciesUseCase<R, P>
where
    R: DependencyResolver,
    P: ProgressReporter,
{
    pub fn new(resolver: R, progress_reporter: P) -> Self {
        Self {
            resolver,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Only a malformed root package is fatal. Unresolvable nodes end up in
    /// the graph's unresolved list and missing reverse targets become
    /// `ReverseLookup::NotFound`.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Build the forward graph
        let graph = self.build_graph(&request)?;

        // Step 2: Answer reverse queries against the built graph
        let reverse_lookups = request
            .reverse_targets
            .iter()
            .map(|query| self.lookup_reverse(&graph, query, request.reverse_max_depth))
            .collect();

        Ok(GraphResponse::new(graph, reverse_lookups))
    }

    fn build_graph(&self, request: &GraphRequest) -> Result<DependencyGraph> {
        match &request.max_depth {
            Some(depth) => self.progress_reporter.report(&format!(
                "🔍 Resolving dependencies of {} (max depth {})...",
                request.package, depth
            )),
            None => self.progress_reporter.report(&format!(
                "🔍 Resolving dependencies of {}...",
                request.package
            )),
        }

        let builder = GraphBuilder::new(&self.resolver, &self.progress_reporter);
        let graph = builder.build(
            &request.package,
            request.version.as_deref(),
            request.max_depth,
        )?;

        self.progress_reporter.report_completion(&format!(
            "✅ Graph built: {} node(s), {} edge(s), {} cycle(s)",
            graph.node_count(),
            graph.edge_count(),
            graph.cycles().len()
        ));

        if !graph.unresolved().is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} package(s) could not be resolved and are shown without dependencies",
                graph.unresolved().len()
            ));
        }

        Ok(graph)
    }

    fn lookup_reverse(
        &self,
        graph: &DependencyGraph,
        query: &ReverseQuery,
        max_depth: Option<usize>,
    ) -> ReverseLookup {
        match ReverseDependencyAnalyzer::analyze(
            graph,
            &query.package,
            query.version.as_deref(),
            max_depth,
        ) {
            Ok(dependents) => ReverseLookup::Found {
                query: query.to_string(),
                dependents,
            },
            Err(e) => {
                let not_found = matches!(
                    e.downcast_ref::<GraphError>(),
                    Some(GraphError::TargetNotFound { .. })
                );
                if !not_found {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Reverse lookup for {} failed: {}",
                        query, e
                    ));
                }
                ReverseLookup::NotFound {
                    query: query.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
