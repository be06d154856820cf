//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default API target (the backend the dev proxy forwards `/api` to)
pub const DEFAULT_API_TARGET: &str = "http://localhost:8080";

/// Fixed path of the books collection, relative to the API target
pub const BOOKS_PATH: &str = "/api/books";

/// Environment variable overriding the API target
pub const API_TARGET_ENV: &str = "BOOKSHELF_API_TARGET";

/// Placeholder used when an error response body cannot be read
pub const NO_BODY: &str = "<no-body>";

/// Connect timeout for the books request
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total timeout for the books request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Log file written next to the configured log directory
pub const LOG_FILE_NAME: &str = "bookshelf.log";

/// Application name
pub const APP_NAME: &str = "Bookshelf";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
