//! Mouse input: grid painting, control buttons and the toast.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::editor::PointerButton;
use crate::tui::control_bar::ControlBar;
use crate::tui::toast::ToastWidget;
use crate::tui::AppState;

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::Primary,
            MouseButton::Right => Self::Secondary,
            MouseButton::Middle => Self::Auxiliary,
        }
    }
}

/// Handle a mouse event. Returns `true` when the app should quit.
///
/// Drags that leave the grid end the stroke; coming back with the button
/// still held does not resume painting.
pub fn handle_mouse_input(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    // A release always ends the stroke, even under an overlay
    if let MouseEventKind::Up(_) = mouse.kind {
        state.editor.on_pointer_up();
        return Ok(false);
    }

    // Overlays own the screen
    if state.error_message.is_some() || state.help.is_some() {
        return Ok(false);
    }

    let (column, row) = (mouse.column, mouse.row);
    let cell = state
        .grid_geometry()
        .and_then(|geometry| geometry.cell_at(column, row));

    match mouse.kind {
        MouseEventKind::Down(button) => {
            if button == MouseButton::Left
                && ToastWidget::hit(state.viewport, state.editor.toast(), column, row)
            {
                state.editor.close_toast();
                return Ok(false);
            }

            if let Some(pos) = cell {
                // Mouse capture already keeps right clicks away from the
                // terminal's own menu.
                state.editor.on_pointer_down(pos, button.into());
                return Ok(false);
            }

            if button == MouseButton::Left {
                let controls = state.layout().controls;
                if let Some(action) = ControlBar::action_at(controls, column, row) {
                    if ControlBar::is_enabled(state, action) {
                        return super::dispatch_action(state, action);
                    }
                }
            }
        }
        MouseEventKind::Drag(_) | MouseEventKind::Moved => match cell {
            Some(pos) => {
                state.editor.on_pointer_move(pos);
            }
            None => state.editor.on_pointer_leave(),
        },
        _ => {}
    }

    Ok(false)
}
