//! Error types for loading books and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Why a book load ended without a list. Every variant is terminal for
/// the load; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The API answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 2xx response whose JSON is neither a book array nor `{content: [...]}`
    #[error("Unexpected response shape: {payload}")]
    Shape { payload: String },

    /// Connection, timeout, body read, or JSON syntax failure
    #[error("{0}")]
    Transport(String),
}

impl LoadError {
    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Http { .. } => "http",
            LoadError::Shape { .. } => "shape",
            LoadError::Transport(_) => "transport",
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        let msg = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_body() || e.is_decode() {
            format!("Error reading body: {}", e)
        } else {
            format!("Request failed: {}", e)
        };
        LoadError::Transport(msg)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid API target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_diagnostics() {
        let http = LoadError::Http { status: 500, body: "boom".into() };
        assert_eq!(http.to_string(), "HTTP 500: boom");

        let shape = LoadError::Shape { payload: "{}".into() };
        assert_eq!(shape.to_string(), "Unexpected response shape: {}");

        let transport = LoadError::Transport("Connection failed: refused".into());
        assert_eq!(transport.to_string(), "Connection failed: refused");
        assert_eq!(transport.kind(), "transport");
    }
}
