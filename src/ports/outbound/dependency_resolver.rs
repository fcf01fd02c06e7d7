use crate::dependency_graph::domain::PackageCoordinates;
use crate::shared::Result;

/// DependencyResolver port for looking up the direct dependencies of a package
///
/// Implemented by the Maven repository client and by the line-based test
/// fixture. The graph builder is generic over this trait and never inspects
/// which backend it holds.
pub trait DependencyResolver {
    /// Returns the direct dependencies of `group:artifact` at `version`
    ///
    /// # Arguments
    /// * `group` - Group id of the package
    /// * `artifact` - Artifact id of the package
    /// * `version` - Version to inspect; `None` lets the resolver pick one
    ///
    /// # Returns
    /// Dependency coordinates in the order the source declares them
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package or its version metadata does not exist
    /// - The source data is malformed
    /// - The network request or file access fails
    fn get_dependencies(
        &self,
        group: &str,
        artifact: &str,
        version: Option<&str>,
    ) -> Result<Vec<PackageCoordinates>>;
}

impl<R: DependencyResolver + ?Sized> DependencyResolver for Box<R> {
    fn get_dependencies(
        &self,
        group: &str,
        artifact: &str,
        version: Option<&str>,
    ) -> Result<Vec<PackageCoordinates>> {
        (**self).get_dependencies(group, artifact, version)
    }
}
