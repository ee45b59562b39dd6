//! Toast popup in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;
use crate::notifier::ToastState;

/// Columns reserved for the close marker and padding.
const CHROME_WIDTH: u16 = 8;

/// Renders a [`ToastState`]; clicking it closes it.
pub struct ToastWidget;

impl ToastWidget {
    /// Screen area of a toast showing `message` inside `frame`.
    #[must_use]
    pub fn area(frame: Rect, message: &str) -> Rect {
        let text_width = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(CHROME_WIDTH).min(frame.width);
        let height = 3_u16.min(frame.height);
        Rect::new(
            frame.x + frame.width.saturating_sub(width + 1),
            frame.y + 1_u16.min(frame.height.saturating_sub(height)),
            width,
            height,
        )
    }

    /// Whether the terminal coordinate falls on the visible toast.
    #[must_use]
    pub fn hit(frame: Rect, toast: &ToastState, column: u16, row: u16) -> bool {
        if !toast.visible {
            return false;
        }
        let area = Self::area(frame, &toast.message);
        column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
    }

    /// Render the toast if visible
    pub fn render(f: &mut Frame, toast: &ToastState, theme: &Theme) {
        if !toast.visible {
            return;
        }

        let area = Self::area(f.area(), &toast.message);
        f.render_widget(Clear, area);

        let content = Line::from(vec![
            Span::styled(
                toast.message.clone(),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("✕", Style::default().fg(theme.text_muted)),
        ]);

        let widget = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(widget, area);
    }
}
