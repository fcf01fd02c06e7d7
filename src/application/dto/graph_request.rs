use crate::dependency_graph::domain::split_package_name;
use crate::shared::error::GraphError;
use crate::shared::Result;

/// A reverse-dependency query: "who depends on this package?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseQuery {
    pub package: String,
    pub version: Option<String>,
}

impl ReverseQuery {
    pub fn new(package: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            package: package.into(),
            version: version.map(str::to_string),
        }
    }

    /// Parses `PACKAGE`, `PACKAGE@VERSION` or `group:artifact:version`
    ///
    /// # Errors
    /// Returns `GraphError::MalformedPackageReference` if the package part is invalid
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();

        let (package, version) = match reference.split_once('@') {
            Some((package, version)) => (package, Some(version)),
            None => match reference.rsplitn(2, ':').collect::<Vec<_>>().as_slice() {
                [version, package] if package.contains(':') => (*package, Some(*version)),
                _ => (reference, None),
            },
        };

        let version = version.map(str::trim);
        if version.is_some_and(str::is_empty) {
            return Err(GraphError::MalformedPackageReference {
                reference: reference.to_string(),
                reason: "version after the package name is empty".to_string(),
            }
            .into());
        }

        split_package_name(package)?;
        Ok(Self::new(package.trim(), version))
    }
}

impl std::fmt::Display for ReverseQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.package, version),
            None => write!(f, "{}", self.package),
        }
    }
}

/// GraphRequest - Internal request DTO for the dependency analysis use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Root package, `group:artifact` or a bare fixture token
    pub package: String,
    /// Root version; `None` lets the resolver pick one
    pub version: Option<String>,
    /// Traversal depth bound, `None` = unbounded
    pub max_depth: Option<usize>,
    pub reverse_targets: Vec<ReverseQuery>,
    /// Hop bound for reverse queries, `None` = unbounded
    pub reverse_max_depth: Option<usize>,
}

impl GraphRequest {
    pub fn new(package: impl Into<String>, version: Option<&str>, max_depth: Option<usize>) -> Self {
        Self {
            package: package.into(),
            version: version.map(str::to_string),
            max_depth,
            reverse_targets: Vec::new(),
            reverse_max_depth: None,
        }
    }

    pub fn with_reverse_targets(mut self, targets: Vec<ReverseQuery>) -> Self {
        self.reverse_targets = targets;
        self
    }

    pub fn with_reverse_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.reverse_max_depth = max_depth;
        self
    }
}
