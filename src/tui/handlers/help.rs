//! Input handler for the help overlay.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::HELP_CONTEXT;
use crate::tui::{AppState, Component};

/// Handle input while the help overlay is open
pub fn handle_help_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(HELP_CONTEXT, key) {
        return super::dispatch_action(state, action);
    }

    if let Some(help) = state.help.as_mut() {
        help.handle_input(key);
        if help.should_close() {
            state.help = None;
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_closes_help() {
        let mut state = AppState::new(Config::default());
        state.open_help();

        handle_help_input(&mut state, press(KeyCode::Esc)).unwrap();
        assert!(state.help.is_none());
    }

    #[test]
    fn test_help_swallows_typing() {
        let mut state = AppState::new(Config::default());
        state.open_help();

        handle_help_input(&mut state, press(KeyCode::Char('5'))).unwrap();
        handle_help_input(&mut state, press(KeyCode::Down)).unwrap();
        assert_eq!(state.editor.label_text(), "");
        assert_eq!(state.help.as_ref().map(|h| h.scroll_offset), Some(1));

        handle_help_input(&mut state, press(KeyCode::Char('q'))).unwrap();
        assert!(state.help.is_none());
    }
}
