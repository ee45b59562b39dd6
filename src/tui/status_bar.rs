//! Status bar widget: label field, sample counts, messages and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::{Action, MAIN_CONTEXT};

/// Actions advertised on the help line, in order.
const HINT_ACTIONS: [Action; 5] = [
    Action::SaveSample,
    Action::ClearGrid,
    Action::ExportSamples,
    Action::ToggleHelp,
    Action::Quit,
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let lines = vec![
            Self::label_line(state, theme),
            Self::message_line(state, theme),
            Self::samples_line(state, theme),
            Self::help_line(state, theme),
        ];

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Label input with a cursor and its validation state
    fn label_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let text = state.editor.label_text().to_string();
        let (hint, hint_style) = if state.editor.can_save() {
            ("ready to save", Style::default().fg(theme.success))
        } else if text.is_empty() {
            ("type a digit 0-9", Style::default().fg(theme.text_muted))
        } else {
            ("label must be a single digit", Style::default().fg(theme.warning))
        };

        Line::from(vec![
            Span::styled("Label: ", Style::default().fg(theme.primary)),
            Span::styled(
                format!("{text}█"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(hint, hint_style),
        ])
    }

    fn message_line(state: &AppState, theme: &Theme) -> Line<'static> {
        if let Some(error) = &state.error_message {
            return Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]);
        }

        match state.status_color_override {
            Some(color) => Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(color),
            )),
            None => Line::from(state.status_message.clone()),
        }
    }

    /// Total samples plus per-digit counts for digits that have any
    fn samples_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let samples = state.editor.samples();
        let mut spans = vec![
            Span::styled("Samples: ", Style::default().fg(theme.primary)),
            Span::raw(samples.len().to_string()),
        ];

        let counts: Vec<String> = samples
            .label_histogram()
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(digit, count)| format!("{digit}:{count}"))
            .collect();
        if !counts.is_empty() {
            spans.push(Span::styled(
                format!("  [{}]", counts.join(" ")),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, action) in HINT_ACTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            let keys = state.shortcuts.keys_for(MAIN_CONTEXT, *action);
            let key = keys.first().cloned().unwrap_or_default();
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action.description()));
        }

        Line::from(spans)
    }
}
