//! # Bookshelf TUI
//!
//! A small terminal front-end that loads the book list from a bookstore
//! API (`GET /api/books`) once and renders it.
//!
//! ## Features
//! - Accepts a bare JSON array or a paginated `{content: [...]}` wrapper
//! - Errors (HTTP status, unexpected payload, transport) shown verbatim
//! - Load is cancelled on quit; late results are dropped
//! - Headless mode for scripts
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (Load state + navigation)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod headless;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use models::{Book, BookId, LoadState};
pub use error::{ConfigError, LoadError};
pub use config::Config;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{NetworkActor, fetch_books, parse_book_list};
