//! Configuration file support for diggity-bom.
//!
//! Provides YAML-based configuration through `diggity-bom.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::Context;
use diggity_bom::shared::error::SbomError;
use diggity_bom::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "diggity-bom.config.yml";

/// Format string used when neither the command line nor the config sets one
pub const DEFAULT_OUTPUT: &str = "cyclonedx-xml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Comma-separated output format tokens
    pub output: Option<String>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective options after command-line arguments override the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub output: String,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
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

/// Loads the explicit config if one was given, otherwise tries discovery
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}

/// Merges command-line arguments over config values.
pub fn merge(args: &Args, config: Option<ConfigFile>) -> ResolvedOptions {
    let config = config.unwrap_or_default();

    ResolvedOptions {
        output: args
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        output_file: args.output_file.clone().or(config.output_file),
        quiet: args.quiet || config.quiet.unwrap_or(false),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            return Err(SbomError::Validation {
                message: "output must not be empty.\n\n💡 Hint: List one or more formats, e.g. \"cyclonedx-xml,spdx-json\".".to_string(),
            }
            .into());
        }
    }
    if let Some(ref output_file) = config.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(SbomError::Validation {
                message: "output_file must not be empty.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
