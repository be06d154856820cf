//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::messages::RenderState;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List navigation
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    // Filter
    StartFilter,
    FilterInput(char),
    FilterBackspace,
    ApplyFilter,
    ClearFilter,

    // Popups
    ToggleDetails,
    ToggleHelp,
    ClosePopup,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key dismisses an open popup
    if state.show_help || state.show_details {
        return Some(UiEvent::ClosePopup);
    }

    if state.filter_editing {
        return filter_key(key);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Esc if !state.filter.is_empty() => Some(UiEvent::ClearFilter),
        KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('/') => Some(UiEvent::StartFilter),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Home | KeyCode::Char('g') => Some(UiEvent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(UiEvent::SelectLast),
        KeyCode::Enter => Some(UiEvent::ToggleDetails),
        _ => None,
    }
}

/// Keys while the filter prompt is open: text goes into the query
fn filter_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Enter => Some(UiEvent::ApplyFilter),
        KeyCode::Esc => Some(UiEvent::ClearFilter),
        KeyCode::Backspace => Some(UiEvent::FilterBackspace),
        KeyCode::Down => Some(UiEvent::SelectNext),
        KeyCode::Up => Some(UiEvent::SelectPrev),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiEvent::FilterInput(c))
        }
        _ => None,
    }
}
