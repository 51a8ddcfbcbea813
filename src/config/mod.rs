//! Configuration management
//!
//! Settings live in `~/.superlists/config.yaml`. Every key is optional and a
//! missing file means defaults. Command-line flags take precedence over the
//! file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::storage::db::default_db_path;

/// Address the server binds to when neither the file nor the CLI says otherwise.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file; `~/.superlists/superlists.db` when unset
    pub database_path: Option<PathBuf>,

    /// Listen address for `serve`
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parses YAML config text. Empty text yields defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_saphyr::from_str(content)?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
            .join(".superlists");

        Ok(config_dir.join("config.yaml"))
    }

    /// Database path to use: the CLI flag, then the config file, then the default.
    pub fn resolve_db_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }
        Ok(default_db_path()?)
    }

    /// Listen address to use: the CLI flag, then the config file.
    pub fn resolve_bind_address(&self, cli_override: Option<&str>) -> Result<SocketAddr> {
        let raw = cli_override.unwrap_or(&self.bind_address);
        raw.parse()
            .with_context(|| format!("Invalid bind address '{raw}'"))
    }
}
