//! Main UI input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::shortcuts::MAIN_CONTEXT;
use crate::tui::AppState;

/// Handle input for main UI.
///
/// Bound keys dispatch their action; any other plain character is typed into
/// the label field.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(MAIN_CONTEXT, key) {
        return super::dispatch_action(state, action);
    }

    if let KeyCode::Char(c) = key.code {
        if !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            state.editor.push_label_char(c);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_edits_label() {
        let mut state = AppState::new(Config::default());

        handle_main_input(&mut state, press(KeyCode::Char('4'))).unwrap();
        assert_eq!(state.editor.label_text(), "4");
        assert!(state.editor.can_save());

        handle_main_input(&mut state, press(KeyCode::Char('2'))).unwrap();
        assert_eq!(state.editor.label_text(), "42");
        assert!(!state.editor.can_save());

        handle_main_input(&mut state, press(KeyCode::Backspace)).unwrap();
        assert_eq!(state.editor.label_text(), "4");
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut state = AppState::new(Config::default());

        let chord = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        handle_main_input(&mut state, chord).unwrap();
        assert_eq!(state.editor.label_text(), "");
    }

    #[test]
    fn test_quit_shortcut() {
        let mut state = AppState::new(Config::default());

        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(handle_main_input(&mut state, quit).unwrap());
        assert!(state.should_quit);
    }
}
