//! Application configuration for sitelift.
//!
//! Config is read from a `sitelift.toml` whose location the caller chooses.
//! Values missing from the file fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteliftError};
use crate::types::ClosePolicy;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "sitelift.toml";

// ---------------------------------------------------------------------------
// Config structs (matching sitelift.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Tag of the element that carries the entry and its sections.
    #[serde(default = "default_root_tag")]
    pub root_tag: String,

    /// How elements without children are closed.
    #[serde(default)]
    pub close_policy: ClosePolicy,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            root_tag: default_root_tag(),
            close_policy: ClosePolicy::default(),
        }
    }
}

fn default_root_tag() -> String {
    "div".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the application config from `path`. Returns defaults if the file does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(path)
}

/// Load the application config from a specific file path, which must exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SiteliftError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| SiteliftError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Write a default `sitelift.toml` into `dir`, creating the directory if needed.
/// Returns the path to the created file.
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| SiteliftError::io(dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| SiteliftError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SiteliftError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
