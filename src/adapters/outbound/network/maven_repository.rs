use crate::dependency_graph::domain::PackageCoordinates;
use crate::ports::outbound::DependencyResolver;
use crate::shared::error::GraphError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct MavenMetadata {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    versioning: Option<Versioning>,
}

#[derive(Debug, Deserialize)]
struct Versioning {
    #[serde(default)]
    latest: Option<String>,
    #[serde(default)]
    release: Option<String>,
    #[serde(default)]
    versions: Option<VersionList>,
}

#[derive(Debug, Deserialize)]
struct VersionList {
    #[serde(default)]
    version: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Pom {
    #[serde(default)]
    dependencies: Option<PomDependencies>,
}

#[derive(Debug, Deserialize)]
struct PomDependencies {
    #[serde(default)]
    dependency: Vec<PomDependency>,
}

#[derive(Debug, Deserialize)]
struct PomDependency {
    #[serde(rename = "groupId", default)]
    group_id: Option<String>,
    #[serde(rename = "artifactId", default)]
    artifact_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// MavenRepository adapter resolving dependencies from a remote Maven layout
///
/// Implements the DependencyResolver port on top of `maven-metadata.xml`
/// (to pick a version when none is given) and the artifact's POM file.
/// Requests are blocking; the graph builder issues one at a time.
#[derive(Debug)]
pub struct MavenRepository {
    client: reqwest::blocking::Client,
    base_url: String,
    max_retries: u32,
}

impl MavenRepository {
    /// Creates a repository client for `base_url` with default configuration
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the HTTP client cannot be built
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GraphError::InvalidArgument {
                message: format!(
                    "Repository URL must start with http:// or https:// (got '{}')",
                    base_url
                ),
            }
            .into());
        }

        let user_agent = format!("maven-depgraph/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            max_retries: 3,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates a coordinate before it becomes part of a URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} is empty", component_type);
        }

        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
        }

        Ok(())
    }

    /// `org.apache.commons` -> `org/apache/commons`, each segment percent-encoded
    fn group_path(group: &str) -> String {
        group
            .split('.')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn metadata_url(&self, group: &str, artifact: &str) -> String {
        format!(
            "{}/{}/{}/maven-metadata.xml",
            self.base_url,
            Self::group_path(group),
            urlencoding::encode(artifact)
        )
    }

    fn pom_url(&self, group: &str, artifact: &str, version: &str) -> String {
        let artifact = urlencoding::encode(artifact);
        let version = urlencoding::encode(version);
        format!(
            "{}/{}/{}/{}/{}-{}.pom",
            self.base_url,
            Self::group_path(group),
            artifact,
            version,
            artifact,
            version
        )
    }

    /// GETs `url`; `Ok(None)` means the server answered 404
    fn fetch_text(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            anyhow::bail!("HTTP {} while fetching {}", response.status(), url);
        }

        Ok(Some(response.text()?))
    }

    /// Fetches with retry; a 404 is an answer, not a transient failure
    fn fetch_with_retry(&self, url: &str) -> Result<Option<String>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_text(url) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No request attempted for {}", url)))
    }

    fn latest_version(&self, group: &str, artifact: &str) -> Result<String> {
        let url = self.metadata_url(group, artifact);
        let xml = self
            .fetch_with_retry(&url)?
            .ok_or_else(|| anyhow::anyhow!("Package {}:{} not found in repository", group, artifact))?;

        parse_latest_version(&xml)
            .with_context(|| format!("Invalid maven-metadata.xml for {}:{}", group, artifact))
    }

    fn pom_dependencies(
        &self,
        group: &str,
        artifact: &str,
        version: &str,
    ) -> Result<Vec<PackageCoordinates>> {
        let url = self.pom_url(group, artifact, version);
        let xml = self.fetch_with_retry(&url)?.ok_or_else(|| {
            anyhow::anyhow!("POM for {}:{}:{} not found in repository", group, artifact, version)
        })?;

        parse_pom_dependencies(&xml)
            .with_context(|| format!("Invalid POM for {}:{}:{}", group, artifact, version))
    }

    fn resolve(
        &self,
        group: &str,
        artifact: &str,
        version: Option<&str>,
    ) -> Result<Vec<PackageCoordinates>> {
        Self::validate_url_component(group, "Group id")?;
        Self::validate_url_component(artifact, "Artifact id")?;

        let version = match version {
            Some(v) => v.to_string(),
            None => self.latest_version(group, artifact)?,
        };
        Self::validate_url_component(&version, "Version")?;

        self.pom_dependencies(group, artifact, &version)
    }
}

impl DependencyResolver for MavenRepository {
    fn get_dependencies(
        &self,
        group: &str,
        artifact: &str,
        version: Option<&str>,
    ) -> Result<Vec<PackageCoordinates>> {
        self.resolve(group, artifact, version).map_err(|e| {
            GraphError::ResolutionFailure {
                package: format!("{}:{}", group, artifact),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}

/// Picks the version to use from a `maven-metadata.xml` document
///
/// Preference: `<latest>`, then `<release>`, then the last listed
/// `<version>`, then the top-level `<version>`.
fn parse_latest_version(xml: &str) -> Result<String> {
    let metadata: MavenMetadata = quick_xml::de::from_str(xml)?;

    let non_empty = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let versioning = metadata.versioning.as_ref();
    versioning
        .and_then(|v| non_empty(&v.latest))
        .or_else(|| versioning.and_then(|v| non_empty(&v.release)))
        .or_else(|| {
            versioning
                .and_then(|v| v.versions.as_ref())
                .and_then(|list| list.version.iter().rev().find(|v| !v.trim().is_empty()))
                .map(|v| v.trim().to_string())
        })
        .or_else(|| non_empty(&metadata.version))
        .ok_or_else(|| anyhow::anyhow!("No versions listed"))
}

/// Extracts the direct `<dependencies>` of a POM document
///
/// Entries without a group or artifact id are skipped; a missing version is
/// kept as absent.
fn parse_pom_dependencies(xml: &str) -> Result<Vec<PackageCoordinates>> {
    let pom: Pom = quick_xml::de::from_str(xml)?;

    let dependencies = pom
        .dependencies
        .map(|deps| deps.dependency)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|dep| {
            let group = dep.group_id.as_deref().map(str::trim).filter(|g| !g.is_empty())?;
            let artifact = dep
                .artifact_id
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty())?;
            Some(PackageCoordinates::new(
                group,
                artifact,
                dep.version.as_deref().map(str::trim),
            ))
        })
        .collect();

    Ok(dependencies)
}
