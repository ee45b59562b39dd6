//! Clickable Clear / Save / Export buttons.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::shortcuts::Action;

/// Buttons in display order.
pub const BUTTONS: [Action; 3] = [Action::ClearGrid, Action::SaveSample, Action::ExportSamples];

/// Row of control buttons under the grid.
pub struct ControlBar;

impl ControlBar {
    /// Screen area of each button.
    #[must_use]
    pub fn button_areas(area: Rect) -> Vec<(Action, Rect)> {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        BUTTONS.iter().copied().zip(chunks.iter().copied()).collect()
    }

    /// Button under the terminal coordinate, if any.
    #[must_use]
    pub fn action_at(area: Rect, column: u16, row: u16) -> Option<Action> {
        Self::button_areas(area)
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(action, _)| action)
    }

    /// Whether the button for `action` accepts clicks right now.
    #[must_use]
    pub fn is_enabled(state: &AppState, action: Action) -> bool {
        match action {
            Action::SaveSample => state.editor.can_save(),
            Action::ExportSamples => state.editor.can_export(),
            _ => true,
        }
    }

    fn caption(state: &AppState, action: Action) -> String {
        match action {
            Action::ClearGrid => "Clear".to_string(),
            Action::SaveSample => match state.editor.current_label() {
                Some(label) => format!("Save as {label}"),
                None => "Save".to_string(),
            },
            Action::ExportSamples => format!("Export ({})", state.editor.samples().len()),
            other => other.description().to_string(),
        }
    }

    /// Render the buttons, dimming disabled ones
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        for (action, rect) in Self::button_areas(area) {
            let style = if Self::is_enabled(state, action) {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };

            let button = Paragraph::new(Self::caption(state, action))
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(style)
                        .style(Style::default().bg(theme.background)),
                );
            f.render_widget(button, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_areas_cover_row() {
        let area = Rect::new(0, 10, 30, 3);
        let areas = ControlBar::button_areas(area);
        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0].0, Action::ClearGrid);
        assert_eq!(areas[1].0, Action::SaveSample);
        assert_eq!(areas[2].0, Action::ExportSamples);
        assert_eq!(areas.iter().map(|(_, r)| r.width).sum::<u16>(), 30);
    }

    #[test]
    fn test_action_at() {
        let area = Rect::new(0, 10, 30, 3);
        assert_eq!(ControlBar::action_at(area, 1, 11), Some(Action::ClearGrid));
        assert_eq!(ControlBar::action_at(area, 15, 10), Some(Action::SaveSample));
        assert_eq!(ControlBar::action_at(area, 29, 12), Some(Action::ExportSamples));
        assert_eq!(ControlBar::action_at(area, 15, 13), None);
        assert_eq!(ControlBar::action_at(area, 15, 9), None);
    }
}
