use crate::dependency_graph::domain::PackageCoordinates;
use crate::ports::outbound::DependencyResolver;
use crate::shared::error::GraphError;
use crate::shared::{security, Result};
use indexmap::IndexMap;
use std::path::Path;

/// Version reported for every dependency listed in a fixture file
pub const FIXTURE_VERSION: &str = "1.0.0";

/// A fixture line that could not be parsed and was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line_number: usize,
    pub content: String,
}

/// FixtureRepository adapter backed by a flat text file
///
/// Each line declares the direct dependencies of one package:
///
/// ```text
/// # comment
/// A -> B, C
/// B -> C
/// ```
///
/// Repeated package lines accumulate. A package that never appears on the
/// left-hand side is unknown to the repository.
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    packages: IndexMap<String, Vec<String>>,
    malformed: Vec<MalformedLine>,
}

impl FixtureRepository {
    /// Loads a fixture file after the regular-file and size checks
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = security::read_text_file(path, "test repository").map_err(|e| {
            GraphError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut repository = Self::default();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((package, deps)) = line.split_once("->") else {
                repository.malformed.push(MalformedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                });
                continue;
            };

            let package = package.trim();
            if package.is_empty() {
                repository.malformed.push(MalformedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                });
                continue;
            }

            repository
                .packages
                .entry(package.to_string())
                .or_default()
                .extend(
                    deps.split(',')
                        .map(str::trim)
                        .filter(|dep| !dep.is_empty())
                        .map(str::to_string),
                );
        }

        repository
    }

    /// Lines skipped while parsing
    pub fn malformed_lines(&self) -> &[MalformedLine] {
        &self.malformed
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Whole `group:artifact` token first, then the group, then the artifact
    fn lookup(&self, group: &str, artifact: &str) -> Option<&Vec<String>> {
        let token = format!("{}:{}", group, artifact);

        self.packages
            .get(&token)
            .or_else(|| self.packages.get(group))
            .or_else(|| self.packages.get(artifact))
    }
}

impl DependencyResolver for FixtureRepository {
    fn get_dependencies(
        &self,
        group: &str,
        artifact: &str,
        _version: Option<&str>,
    ) -> Result<Vec<PackageCoordinates>> {
        let deps = self
            .lookup(group, artifact)
            .ok_or_else(|| GraphError::ResolutionFailure {
                package: format!("{}:{}", group, artifact),
                details: "Package not found in test repository".to_string(),
            })?;

        Ok(deps
            .iter()
            .map(|dep| PackageCoordinates::new(dep.as_str(), dep.as_str(), Some(FIXTURE_VERSION)))
            .collect())
    }
}
