use super::node_id::{normalize_version, NodeId};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// Maximum length for a package reference (security limit)
const MAX_PACKAGE_REFERENCE_LENGTH: usize = 512;

/// PackageCoordinates value object: a (group, artifact, version) triple as
/// reported by a resolver
///
/// Unlike [`NodeId`], the version keeps its absence, so callers can tell a
/// pinned dependency from one the resolver has to pick a version for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCoordinates {
    group: String,
    artifact: String,
    version: Option<String>,
}

impl PackageCoordinates {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<&str>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: normalize_version(version).map(str::to_string),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn id(&self) -> NodeId {
        NodeId::new(&self.group, &self.artifact, self.version())
    }
}

/// Splits a package reference into (group, artifact)
///
/// `"group:artifact"` splits on the separator; a bare token such as `"A"` is
/// used for both group and artifact.
///
/// # Errors
/// Returns `GraphError::MalformedPackageReference` when the reference is
/// blank, too long, has an empty half, or holds more than one separator.
pub fn split_package_name(reference: &str) -> Result<(String, String)> {
    let trimmed = reference.trim();
    let malformed = |reason: &str| GraphError::MalformedPackageReference {
        reference: reference.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(malformed("package reference is empty").into());
    }

    if trimmed.len() > MAX_PACKAGE_REFERENCE_LENGTH {
        return Err(malformed(&format!(
            "package reference is too long ({} bytes, maximum {})",
            trimmed.len(),
            MAX_PACKAGE_REFERENCE_LENGTH
        ))
        .into());
    }

    match trimmed.split_once(':') {
        None => Ok((trimmed.to_string(), trimmed.to_string())),
        Some((group, artifact)) => {
            let (group, artifact) = (group.trim(), artifact.trim());
            if group.is_empty() {
                return Err(malformed("group is empty").into());
            }
            if artifact.is_empty() {
                return Err(malformed("artifact is empty").into());
            }
            if artifact.contains(':') {
                return Err(malformed("expected exactly one ':' separator").into());
            }
            Ok((group.to_string(), artifact.to_string()))
        }
    }
}
