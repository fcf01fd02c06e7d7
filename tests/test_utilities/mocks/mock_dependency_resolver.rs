use maven_depgraph::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock DependencyResolver keyed by `group:artifact`
///
/// Every dependency is reported at version 1.0.0 unless added with
/// `with_versioned_dependencies`. Calls are recorded in order.
#[derive(Default, Clone)]
pub struct MockDependencyResolver {
    pub dependencies: HashMap<String, Vec<PackageCoordinates>>,
    pub failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockDependencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `package -> deps` where each name is used as group and artifact
    pub fn with_dependencies(mut self, package: &str, deps: &[&str]) -> Self {
        self.dependencies.insert(
            format!("{}:{}", package, package),
            deps.iter()
                .map(|d| PackageCoordinates::new(*d, *d, Some("1.0.0")))
                .collect(),
        );
        self
    }

    pub fn with_versioned_dependencies(
        mut self,
        group: &str,
        artifact: &str,
        deps: Vec<PackageCoordinates>,
    ) -> Self {
        self.dependencies
            .insert(format!("{}:{}", group, artifact), deps);
        self
    }

    pub fn with_failure(mut self, package: &str) -> Self {
        self.failing.insert(format!("{}:{}", package, package));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyResolver for MockDependencyResolver {
    fn get_dependencies(
        &self,
        group: &str,
        artifact: &str,
        version: Option<&str>,
    ) -> Result<Vec<PackageCoordinates>> {
        let key = format!("{}:{}", group, artifact);
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", key, version.unwrap_or("-")));

        if self.failing.contains(&key) {
            anyhow::bail!("Mock resolver failure for {}", key);
        }

        Ok(self.dependencies.get(&key).cloned().unwrap_or_default())
    }
}
