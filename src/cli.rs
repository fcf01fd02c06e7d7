use clap::Parser;
use std::path::{Path, PathBuf};

use crate::application::dto::{GraphRequest, OutputFormat, ReverseQuery};
use crate::config::{ConfigFile, MAX_DEPTH_LIMIT};
use crate::dependency_graph::domain::split_package_name;
use crate::shared::error::GraphError;
use crate::shared::{security, Result};

/// Characters not allowed in an output file name
const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Explore the dependency graph of a Maven package
#[derive(Parser, Debug)]
#[command(name = "maven-depgraph")]
#[command(version)]
#[command(
    about = "Explore the dependency graph of a Maven package",
    long_about = "Builds the transitive dependency graph of a Maven package (or of a test \
                  fixture file), reports cycles, answers reverse-dependency queries and \
                  exports the graph for Graphviz."
)]
pub struct Args {
    /// Package to analyze: group:artifact (or a bare name in test mode)
    #[arg(short, long, value_name = "PACKAGE")]
    pub package: String,

    /// Maven repository URL, or path to the fixture file with --test-mode
    #[arg(short, long = "repo", value_name = "REPO")]
    pub repository: Option<String>,

    /// Read dependencies from a fixture file instead of a Maven repository
    #[arg(short, long)]
    pub test_mode: bool,

    /// Package version (defaults to the latest published version)
    #[arg(id = "package_version", short = 'v', long = "package-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Maximum traversal depth (1-100, unbounded when omitted)
    #[arg(
        short = 'd',
        long,
        value_name = "DEPTH",
        value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH_LIMIT as i64)
    )]
    pub max_depth: Option<u32>,

    /// Output format: tree, dot or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the graph to a file: .svg/.png/.pdf are rendered with Graphviz,
    /// any other extension receives DOT text
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List packages depending on PACKAGE[@VERSION]
    /// Can be specified multiple times: --reverse D --reverse org.x:lib@1.0
    #[arg(long = "reverse", value_name = "PACKAGE[@VERSION]")]
    pub reverse: Vec<String>,

    /// Maximum number of reverse hops (unbounded when omitted)
    #[arg(long, value_name = "N")]
    pub reverse_depth: Option<usize>,

    /// Path to a config file (defaults to ./maven-depgraph.config.yml)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Validated settings after merging command-line arguments and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub package: String,
    pub version: Option<String>,
    pub repository: String,
    pub test_mode: bool,
    pub max_depth: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub reverse: Vec<ReverseQuery>,
    pub reverse_depth: Option<usize>,
}

impl Settings {
    /// Merges `args` over `config` and validates the result
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` (or a malformed package error)
    /// describing the first invalid value
    pub fn from_args(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let package = args.package.trim().to_string();
        if package.is_empty() {
            return Err(invalid("Package name must not be empty"));
        }
        split_package_name(&package)?;

        let repository = args
            .repository
            .or(config.repository.clone())
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or_else(|| {
                invalid("A repository is required (--repo URL, or a fixture path with --test-mode)")
            })?;

        let test_mode = args.test_mode || config.test_mode.unwrap_or(false);
        validate_repository(&repository, test_mode)?;

        let version = args.version.map(|v| v.trim().to_string());
        if let Some(ref v) = version {
            validate_version(v)?;
        }

        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let output = args.output.or(config.output.clone().map(PathBuf::from));
        if let Some(ref path) = output {
            validate_output_path(path)?;
        }

        let reverse = args
            .reverse
            .iter()
            .map(|r| ReverseQuery::parse(r))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            package,
            version,
            repository,
            test_mode,
            max_depth: args.max_depth.map(|d| d as usize).or(config.max_depth),
            format,
            output,
            reverse,
            reverse_depth: args.reverse_depth,
        })
    }

    pub fn to_request(&self) -> GraphRequest {
        GraphRequest::new(self.package.clone(), self.version.as_deref(), self.max_depth)
            .with_reverse_targets(self.reverse.clone())
            .with_reverse_max_depth(self.reverse_depth)
    }
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    GraphError::InvalidArgument {
        message: message.into(),
    }
    .into()
}

fn validate_repository(repository: &str, test_mode: bool) -> Result<()> {
    if test_mode {
        security::validate_regular_file(Path::new(repository), "test repository")
            .map_err(|e| invalid(format!("Test repository '{}' is not usable: {}", repository, e)))
    } else if repository.starts_with("http://") || repository.starts_with("https://") {
        Ok(())
    } else {
        Err(invalid(format!(
            "Repository must be an http:// or https:// URL (got '{}'). Use --test-mode for fixture files",
            repository
        )))
    }
}

/// Versions are limited to `[A-Za-z0-9._-]+`
fn validate_version(version: &str) -> Result<()> {
    let valid = !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(invalid(format!("Invalid version format: '{}'", version)))
    }
}

fn validate_output_path(path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    if file_name.trim().is_empty() {
        return Err(invalid(format!(
            "Output path '{}' does not name a file",
            path.display()
        )));
    }

    if file_name.contains(FORBIDDEN_FILENAME_CHARS) {
        return Err(invalid(format!("Invalid output file name: '{}'", file_name)));
    }

    Ok(())
}
