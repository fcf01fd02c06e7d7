pub mod cycle;
pub mod dependency_graph;
pub mod node_id;
pub mod package;
pub mod reverse_index;

pub use cycle::Cycle;
pub use dependency_graph::{DependencyGraph, UnresolvedNode};
pub use node_id::{NodeId, UNKNOWN_VERSION};
pub use package::{split_package_name, PackageCoordinates};
pub use reverse_index::ReverseIndex;
