//! App state - pure data structure with no I/O logic

use reqwest::Url;

use crate::messages::RenderState;
use crate::models::LoadState;

/// Where the view is in its life: the load runs once on mount, and
/// nothing is applied after teardown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub books_url: Url,
    pub lifecycle: Lifecycle,

    // Load
    pub load: LoadState,
    pub time_ms: Option<u64>,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // List navigation
    pub selected: usize,
    pub filter: String,
    pub filter_editing: bool,

    // Popups
    pub show_help: bool,
    pub show_details: bool,
}

impl AppState {
    pub fn new(books_url: Url) -> Self {
        AppState {
            books_url,
            lifecycle: Lifecycle::Created,
            load: LoadState::Loading,
            time_ms: None,
            next_request_id: 1,
            pending_request_id: None,
            selected: 0,
            filter: String::new(),
            filter_editing: false,
            show_help: false,
            show_details: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            load: self.load.clone(),
            books_url: self.books_url.to_string(),
            time_ms: self.time_ms,
            selected: self.selected,
            filter: self.filter.clone(),
            filter_editing: self.filter_editing,
            show_help: self.show_help,
            show_details: self.show_details,
        }
    }
}
