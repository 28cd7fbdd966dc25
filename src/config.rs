//! Configuration file support for fda-sbom.
//!
//! An optional `fda-sbom.config.yml` supplies defaults for the `generate`
//! and `solution` commands. Command-line flags always take precedence.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::application::dto::BomFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fda-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub manufacturer: Option<String>,
    pub device_model: Option<String>,
    pub fda_submission_id: Option<String>,
    pub target_version: Option<String>,
    pub include_vulnerabilities: Option<bool>,
    pub update_licenses: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured export format, if any
    pub fn bom_format(&self) -> Result<Option<BomFormat>> {
        self.format
            .as_deref()
            .map(|name| name.parse::<BomFormat>().map_err(Into::into))
            .transpose()
    }
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

    config.bom_format()?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "using discovered config file");
    load_config_from_path(&config_path).map(Some)
}

/// Explicit `--config` wins over a file found in `dir`.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(dir)?,
    };
    Ok(config.unwrap_or_default())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field ignored");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
