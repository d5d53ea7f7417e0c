//! User configuration
//!
//! Read from `$UMBRELLA_CONFIG` or `<config dir>/umbrella/config.toml`.
//! Every key is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::constants::DEFAULT_ENV_PREFIX;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "UMBRELLA_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Upper bound in seconds on any single git command
    pub git_timeout_secs: u64,
    /// Rows visible at once in the file selector
    pub selector_height: usize,
    /// Basename prefix of ignored files that are still offered for sharing
    pub env_prefix: String,
    /// Log file location; defaults to the platform state directory
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_timeout_secs: 300,
            selector_height: 10,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.selector_height = config.selector_height.max(1);
        Ok(config)
    }

    pub fn git_timeout(&self) -> Duration {
        Duration::from_secs(self.git_timeout_secs.max(1))
    }

    /// Where logs go: the configured file, else `<state dir>/umbrella/umbrella.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .map(|dir| dir.join("umbrella").join("umbrella.log"))
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("umbrella").join("config.toml"))
}
