//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{API_TARGET_ENV, APP_VERSION};
use crate::error::ConfigError;

/// Bookshelf - list the books served by a bookstore API
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version = APP_VERSION)]
#[command(about = "Terminal front-end for a bookstore's /api/books endpoint", long_about = None)]
pub struct Cli {
    /// Origin serving /api/books (e.g. http://localhost:8080)
    #[arg(long, value_name = "URL", env = API_TARGET_ENV)]
    pub api_target: Option<String>,

    /// Config file (defaults to ~/.bookshelf/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load once and print the list to stdout instead of opening the TUI
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    /// Build the effective configuration: file, then flag/env override
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let config = Config::load_from(&path)?;
        Ok(config.with_target_override(self.api_target.clone()))
    }
}
