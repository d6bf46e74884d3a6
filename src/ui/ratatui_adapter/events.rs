//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events onto cursor movement and query edits.

use super::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the finder with the highlighted item
    Confirm,
    /// Exit the finder as aborted
    Abort,
    /// Query changed, needs re-matching
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Handle a key press
fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c' | 'g'), KeyModifiers::CONTROL) => {
            EventResult::Abort
        }
        (KeyCode::Enter, _) => EventResult::Confirm,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k' | 'p'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j' | 'n'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::QueryChanged
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            // Delete word backwards
            let trimmed = state.query[..state.query_cursor].trim_end();
            if let Some(last_space) = trimmed.rfind(' ') {
                state.query.drain(last_space + 1..state.query_cursor);
                state.query_cursor = last_space + 1;
            } else {
                state.query.drain(..state.query_cursor);
                state.query_cursor = 0;
            }
            EventResult::QueryChanged
        }

        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        // Windows reports releases too
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::TemplateMatcher;
    use crate::ui::DisplayItem;

    fn make_state() -> AppState {
        let items: Vec<DisplayItem> = (0..10)
            .map(|i| DisplayItem::new(format!("item{i}"), format!("Item {i}"), vec![format!("item{i}")]))
            .collect();
        AppState::new(items, TemplateMatcher::default())
    }

    fn press(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> EventResult {
        handle_key(state, KeyEvent::new(code, modifiers))
    }

    fn scroll(state: &mut AppState, kind: MouseEventKind) -> EventResult {
        handle_mouse(
            state,
            MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
        )
    }

    #[test]
    fn test_mouse_wheel_moves_cursor() {
        let mut state = make_state();

        assert_eq!(scroll(&mut state, MouseEventKind::ScrollDown), EventResult::Continue);
        assert_eq!(scroll(&mut state, MouseEventKind::ScrollDown), EventResult::Continue);
        assert_eq!(state.cursor, 2);

        assert_eq!(scroll(&mut state, MouseEventKind::ScrollUp), EventResult::Continue);
        assert_eq!(state.cursor, 1);

        assert_eq!(scroll(&mut state, MouseEventKind::Moved), EventResult::Ignored);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_navigation_handling() {
        let mut state = make_state();

        let result = press(&mut state, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(result, EventResult::Continue);
        assert_eq!(state.cursor, 1);

        let result = press(&mut state, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(result, EventResult::Continue);
        assert_eq!(state.cursor, 0);

        press(&mut state, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_query_input() {
        let mut state = make_state();

        let result = press(&mut state, KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(result, EventResult::QueryChanged);
        assert_eq!(state.query, "r");

        let result = press(&mut state, KeyCode::Char('U'), KeyModifiers::SHIFT);
        assert_eq!(result, EventResult::QueryChanged);
        assert_eq!(state.query, "rU");

        press(&mut state, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_backspace_on_empty_query_is_ignored() {
        let mut state = make_state();
        let result = press(&mut state, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(result, EventResult::Ignored);
    }

    #[test]
    fn test_delete_word() {
        let mut state = make_state();
        for c in "go main".chars() {
            state.query_push(c);
        }

        press(&mut state, KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(state.query, "go ");
    }

    #[test]
    fn test_confirm_and_abort() {
        let mut state = make_state();

        assert_eq!(
            press(&mut state, KeyCode::Enter, KeyModifiers::NONE),
            EventResult::Confirm
        );
        assert_eq!(
            press(&mut state, KeyCode::Esc, KeyModifiers::NONE),
            EventResult::Abort
        );
        assert_eq!(
            press(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL),
            EventResult::Abort
        );
    }
}
