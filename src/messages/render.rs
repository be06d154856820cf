//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::{BOOKS_PATH, DEFAULT_API_TARGET};
use crate::models::LoadState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub load: LoadState,
    pub books_url: String,
    /// Request latency, set once the load settles
    pub time_ms: Option<u64>,

    // List navigation
    pub selected: usize,
    /// Client-side filter over the loaded list
    pub filter: String,
    pub filter_editing: bool,

    // Popups
    pub show_help: bool,
    pub show_details: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            load: LoadState::Loading,
            books_url: format!("{}{}", DEFAULT_API_TARGET, BOOKS_PATH),
            time_ms: None,
            selected: 0,
            filter: String::new(),
            filter_editing: false,
            show_help: false,
            show_details: false,
        }
    }
}
