//! Configuration for the books client
//!
//! Loaded in order of precedence:
//! 1. `--api-target` flag, then `BOOKSHELF_API_TARGET` (highest priority)
//! 2. Config file (`~/.bookshelf/config.yaml`)
//! 3. Built-in defaults (lowest priority)

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    BOOKS_PATH, DEFAULT_API_TARGET, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin serving `/api/books`
    pub api_target: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Directory for `bookshelf.log`
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_target: DEFAULT_API_TARGET.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bookshelf")
            .join("config.yaml")
    }

    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        // An empty file parses as YAML null, treat it like a missing one
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply a target from the command line or environment
    pub fn with_target_override(mut self, target: Option<String>) -> Self {
        if let Some(target) = target.filter(|t| !t.trim().is_empty()) {
            self.api_target = target.trim().to_string();
        }
        self
    }

    /// Full URL of the books endpoint. The target is treated as an origin;
    /// any path on it is replaced by `/api/books`.
    pub fn books_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidTarget {
            target: self.api_target.clone(),
            reason,
        };

        let base = Url::parse(&self.api_target).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }
        base.join(BOOKS_PATH).map_err(|e| invalid(e.to_string()))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
