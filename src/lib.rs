//! maven-depgraph - dependency graph explorer for Maven packages
//!
//! Builds the transitive dependency graph of a package with a bounded
//! breadth-first traversal, records dependency cycles, answers "who depends
//! on X" queries and exports the graph as a tree, Graphviz DOT or JSON.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_graph`): graph model and pure graph services
//! - **Application Layer** (`application`): use case, DTOs and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): Maven/fixture resolvers, formatters, writers, Graphviz
//! - **Shared** (`shared`): error types, result alias and file checks
//!
//! # Example
//!
//! ```no_run
//! use maven_depgraph::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let resolver = FixtureRepository::from_path(Path::new("repo.txt"))?;
//! let use_case = AnalyzeDependenciesUseCase::new(resolver, StderrProgressReporter::new());
//!
//! let request = GraphRequest::new("A", None, Some(5))
//!     .with_reverse_targets(vec![ReverseQuery::new("D", None)]);
//! let response = use_case.execute(request)?;
//!
//! println!("{}", TreeFormatter::new().format(&response.graph)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, FixtureRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        render_cycle_report, render_reverse_report, DotFormatter, JsonFormatter, TreeFormatter,
    };
    pub use crate::adapters::outbound::network::MavenRepository;
    pub use crate::adapters::outbound::renderer::GraphvizRenderer;
    pub use crate::application::dto::{
        GraphRequest, GraphResponse, OutputFormat, ReverseLookup, ReverseQuery,
    };
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::dependency_graph::domain::{
        Cycle, DependencyGraph, NodeId, PackageCoordinates, UnresolvedNode,
    };
    pub use crate::dependency_graph::services::{GraphBuilder, ReverseDependencyAnalyzer};
    pub use crate::ports::outbound::{
        DependencyResolver, GraphFormatter, GraphRenderer, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
