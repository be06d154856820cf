//! Command handlers - business logic for processing UI events

use crate::app::state::Lifecycle;
use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Lifecycle
    // ========================

    /// Mount the view. Only the first call issues the load.
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        if self.lifecycle != Lifecycle::Created {
            return None;
        }
        self.lifecycle = Lifecycle::Mounted;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::LoadBooks {
            id,
            url: self.books_url.clone(),
        })
    }

    /// Tear the view down, cancelling the load if it is still in flight
    pub fn unmount(&mut self) -> Option<NetworkCommand> {
        self.lifecycle = Lifecycle::TornDown;
        self.pending_request_id.take().map(NetworkCommand::CancelRequest)
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let response_id = response.id();

        if self.lifecycle != Lifecycle::Mounted {
            tracing::debug!(id = response_id, "Ignoring response after teardown");
            return;
        }
        if self.pending_request_id != Some(response_id) {
            tracing::debug!(id = response_id, "Ignoring stale response");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::BooksLoaded { result, time_ms, .. } => {
                if self.load.settle(result) {
                    self.time_ms = Some(time_ms);
                    self.selected = 0;
                }
            }
            NetworkResponse::Cancelled { .. } => {
                tracing::info!(id = response_id, "Load cancelled while mounted");
            }
        }
    }

    // ========================
    // List navigation
    // ========================

    /// Books currently shown, after the filter
    fn book_count(&self) -> usize {
        self.load.visible(&self.filter).len()
    }

    pub fn select_next(&mut self) {
        let count = self.book_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.book_count().saturating_sub(1);
    }

    // ========================
    // Filter
    // ========================
    // Narrows the loaded list in place; never issues a request.

    pub fn start_filter(&mut self) {
        self.filter_editing = true;
    }

    pub fn filter_input(&mut self, c: char) {
        self.filter.push(c);
        self.selected = 0;
    }

    pub fn filter_backspace(&mut self) {
        if self.filter.pop().is_some() {
            self.selected = 0;
        }
    }

    pub fn apply_filter(&mut self) {
        self.filter_editing = false;
        tracing::debug!(filter = %self.filter, shown = self.book_count(), "Filter applied");
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filter_editing = false;
        self.selected = 0;
    }

    // ========================
    // Popups
    // ========================

    /// Details need a book to show
    pub fn toggle_details(&mut self) {
        if self.show_details {
            self.show_details = false;
        } else if self.selected < self.book_count() {
            self.show_details = true;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_popup(&mut self) {
        self.show_help = false;
        self.show_details = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::models::{Book, BookId, LoadState};

    fn state() -> AppState {
        AppState::new("http://localhost:8080/api/books".parse().unwrap())
    }

    fn books(n: i64) -> Vec<Book> {
        (1..=n)
            .map(|i| Book::new(BookId::Number(i), format!("Book {}", i), "Anon", "isbn", Some(1.0), ""))
            .collect()
    }

    fn loaded(id: u64, result: Result<Vec<Book>, LoadError>) -> NetworkResponse {
        NetworkResponse::BooksLoaded { id, result, time_ms: 12 }
    }

    #[test]
    fn test_mount_issues_exactly_one_load() {
        let mut state = state();
        let cmd = state.mount();
        assert!(matches!(cmd, Some(NetworkCommand::LoadBooks { id: 1, ref url }) if url.path() == "/api/books"));
        assert!(state.mount().is_none());
        assert!(state.load.is_loading());
    }

    #[test]
    fn test_loaded_response_settles_state() {
        let mut state = state();
        state.mount();
        state.handle_response(loaded(1, Ok(books(3))));

        assert_eq!(state.load.books().len(), 3);
        assert_eq!(state.time_ms, Some(12));
        assert!(state.pending_request_id.is_none());
    }

    #[test]
    fn test_failed_response_shows_error() {
        let mut state = state();
        state.mount();
        state.handle_response(loaded(
            1,
            Err(LoadError::Http { status: 500, body: "boom".into() }),
        ));

        let render = state.to_render_state();
        assert!(!render.load.is_loading());
        assert_eq!(render.load.error(), Some("HTTP 500: boom"));
        assert!(render.load.books().is_empty());
    }

    #[test]
    fn test_stale_id_is_ignored() {
        let mut state = state();
        state.mount();
        state.handle_response(loaded(99, Ok(books(2))));
        assert!(state.load.is_loading());
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_late_response_after_teardown_is_ignored() {
        let mut state = state();
        state.mount();

        let cancel = state.unmount();
        assert!(matches!(cancel, Some(NetworkCommand::CancelRequest(1))));

        state.handle_response(loaded(1, Ok(books(2))));
        assert_eq!(state.load, LoadState::Loading);
        assert!(state.unmount().is_none());
    }

    #[test]
    fn test_settled_state_is_not_reopened() {
        let mut state = state();
        state.mount();
        state.handle_response(loaded(1, Ok(books(1))));
        // Same id again, e.g. a duplicate delivery
        state.handle_response(loaded(1, Err(LoadError::Transport("late".into()))));
        assert_eq!(state.load.books().len(), 1);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = state();
        state.mount();
        state.handle_response(loaded(1, Ok(books(3))));

        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_filter_narrows_without_reloading() {
        let mut state = state();
        state.mount();
        state.handle_response(loaded(
            1,
            Ok(vec![
                Book::new(BookId::Number(1), "Dune", "Frank Herbert", "9780441013593", None, ""),
                Book::new(BookId::Number(2), "Emma", "Jane Austen", "9780141439587", None, ""),
                Book::new(BookId::Number(3), "Persuasion", "Jane Austen", "9780141439686", None, ""),
            ]),
        ));
        state.select_last();
        assert_eq!(state.selected, 2);

        state.start_filter();
        for c in "austen".chars() {
            state.filter_input(c);
        }
        assert_eq!(state.selected, 0);
        assert_eq!(state.book_count(), 2);

        // Selection is clamped to the filtered list
        state.select_last();
        assert_eq!(state.selected, 1);
        state.select_next();
        assert_eq!(state.selected, 1);

        state.apply_filter();
        let render = state.to_render_state();
        assert_eq!(render.filter, "austen");
        assert!(!render.filter_editing);
        assert_eq!(render.load.books().len(), 3);

        state.filter_backspace();
        assert_eq!(state.filter, "auste");

        state.clear_filter();
        assert_eq!(state.book_count(), 3);

        // No load was issued for any of it
        assert_eq!(state.next_request_id, 2);
        assert!(state.pending_request_id.is_none());
        assert!(state.mount().is_none());
    }

    #[test]
    fn test_details_follow_filtered_selection() {
        let mut state = state();
        state.mount();
        state.handle_response(loaded(1, Ok(books(2))));
        for c in "zzz".chars() {
            state.filter_input(c);
        }
        state.toggle_details();
        assert!(!state.show_details);
    }

    #[test]
    fn test_details_require_a_book() {
        let mut state = state();
        state.toggle_details();
        assert!(!state.show_details);

        state.mount();
        state.handle_response(loaded(1, Ok(books(1))));
        state.toggle_details();
        assert!(state.show_details);
        state.close_popup();
        assert!(!state.show_details);
    }
}
