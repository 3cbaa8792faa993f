//! Application configuration
//!
//! The config file carries an endpoint block and a log level. JSON is the
//! default format; `.yaml` / `.yml` files are parsed as YAML.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

/// File name looked up by [`find_config`]
pub const CONFIG_FILE_NAME: &str = "config.json";

// ============================================================================
// Config Types
// ============================================================================

/// Top-level application config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream endpoint description
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Endpoint block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(rename = "type", default)]
    pub endpoint_type: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub model: String,
}

impl AppConfig {
    /// Parse a JSON config
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML config
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parsed log level
    pub fn level(&self) -> Result<Level> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| Error::config(format!("Unknown log level '{}'", self.log_level)))
    }

    fn validate(&self) -> Result<()> {
        self.level().map(|_| ())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config file, choosing the parser from the file extension
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {e}",
            path.display()
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => AppConfig::from_yaml_str(&content),
        _ => AppConfig::from_json_str(&content),
    }
}

/// `config.json` in the parent of `dir`, whether or not it exists
pub fn parent_config_path(dir: impl AsRef<Path>) -> Option<PathBuf> {
    dir.as_ref().parent().map(|parent| parent.join(CONFIG_FILE_NAME))
}

/// Look for `config.json` in `dir`, then in its parent
pub fn find_config(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();
    std::iter::once(dir)
        .chain(dir.parent())
        .map(|d| d.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
