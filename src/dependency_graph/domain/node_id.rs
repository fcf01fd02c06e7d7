use std::fmt;

/// Version sentinel used when a package reference carries no version
pub const UNKNOWN_VERSION: &str = "unknown";

/// NodeId value object identifying one package node in the graph
///
/// Two nodes are the same iff group, artifact and version are equal as strings.
/// An absent version is normalized to [`UNKNOWN_VERSION`], so unversioned
/// references to the same package collapse into one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    group: String,
    artifact: String,
    version: String,
}

impl NodeId {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<&str>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: normalize_version(version)
                .unwrap_or(UNKNOWN_VERSION)
                .to_string(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns true when the node carries a real version, not the sentinel
    pub fn is_versioned(&self) -> bool {
        self.version != UNKNOWN_VERSION
    }

    /// Returns true when group and artifact match, whatever the version
    pub fn matches_package(&self, group: &str, artifact: &str) -> bool {
        self.group == group && self.artifact == artifact
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Maps empty, blank and sentinel versions to `None`
pub(crate) fn normalize_version(version: Option<&str>) -> Option<&str> {
    version
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != UNKNOWN_VERSION)
}
