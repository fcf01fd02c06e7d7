//! Configuration file support for maven-depgraph.
//!
//! Settings can live in a `maven-depgraph.config.yml` file in the working
//! directory (or any path given with `--config`). Command-line values always
//! take precedence over file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::{security, Result};

pub const CONFIG_FILENAME: &str = "maven-depgraph.config.yml";

/// Upper bound for `max_depth`, shared with the command line
pub const MAX_DEPTH_LIMIT: usize = 100;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Maven repository URL, or fixture file path in test mode
    pub repository: Option<String>,
    pub test_mode: Option<bool>,
    pub max_depth: Option<usize>,
    pub format: Option<String>,
    /// Graph image (`.svg`, `.png`, `.pdf`) or DOT file path
    pub output: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The `format` field parsed, if present
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(|e| anyhow::anyhow!("Invalid config: {}", e)))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = security::read_text_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(depth) = config.max_depth {
        if depth == 0 || depth > MAX_DEPTH_LIMIT {
            bail!(
                "Invalid config: max_depth must be between 1 and {} (got {}).\n\n\
                 💡 Hint: Remove max_depth to traverse the whole graph.",
                MAX_DEPTH_LIMIT,
                depth
            );
        }
    }

    if let Some(ref repository) = config.repository {
        if repository.trim().is_empty() {
            bail!("Invalid config: repository must not be empty.");
        }
    }

    config.output_format()?;
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
