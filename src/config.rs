//! Configuration file support for comply-scan.
//!
//! Provides YAML-based configuration through `comply-scan.config.yml`
//! files, including data structures, file loading, and validation. CLI
//! flags always take precedence over config file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::compliance::domain::{CheckCategory, MAX_SCORE};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "comply-scan.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub checks: Option<Vec<String>>,
    pub fail_under: Option<u8>,
    pub endpoint: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(
            "Invalid config: {}\n\n💡 Hint: 'format' must be 'json' or 'markdown'.",
            e
        ))?;
    }

    if let Some(ref checks) = config.checks {
        if checks.is_empty() {
            bail!(
                "Invalid config: 'checks' must not be empty.\n\n\
                 💡 Hint: list at least one category (e.g. [rgpd, pii]) or omit the field."
            );
        }
        for (i, check) in checks.iter().enumerate() {
            CheckCategory::from_str(check).map_err(|e| {
                anyhow::anyhow!("Invalid config: checks[{}]: {}", i, e)
            })?;
        }
    }

    if let Some(fail_under) = config.fail_under {
        if fail_under > MAX_SCORE {
            bail!(
                "Invalid config: fail_under must be between 0 and {}, got {}.",
                MAX_SCORE,
                fail_under
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
