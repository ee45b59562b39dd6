//! Help overlay listing keyboard shortcuts and mouse gestures.
//!
//! Key names come from the shortcut registry so the overlay always shows the
//! bindings that are actually active.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::component::Component;
use super::Theme;
use crate::shortcuts::{Action, ShortcutRegistry, MAIN_CONTEXT};

/// Width of the key column in help rows.
const KEY_COLUMN: usize = 20;

/// Lines scrolled by PageUp / PageDown.
const PAGE_SIZE: usize = 10;

/// One row of help content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpEntry {
    Section(&'static str),
    Shortcut { keys: String, description: String },
    Tip(&'static str),
    Blank,
}

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEvent {
    /// User asked to close the overlay
    Close,
}

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    entries: Vec<HelpEntry>,
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    closed: bool,
}

impl HelpOverlay {
    /// Builds the overlay from the active key bindings.
    #[must_use]
    pub fn new(shortcuts: &ShortcutRegistry) -> Self {
        let shortcut = |action: Action| HelpEntry::Shortcut {
            keys: shortcuts.keys_for(MAIN_CONTEXT, action).join(" / "),
            description: action.description().to_string(),
        };
        let gesture = |keys: &str, description: &str| HelpEntry::Shortcut {
            keys: keys.to_string(),
            description: description.to_string(),
        };

        let entries = vec![
            HelpEntry::Section("DRAWING"),
            HelpEntry::Blank,
            gesture("Left drag", "Draw black cells"),
            gesture("Right drag", "Erase cells back to white"),
            gesture("Release / leave", "Stop painting"),
            shortcut(Action::ClearGrid),
            HelpEntry::Blank,
            HelpEntry::Section("LABEL"),
            HelpEntry::Blank,
            gesture("0-9", "Type the digit the drawing shows"),
            shortcut(Action::DeleteLabelChar),
            HelpEntry::Blank,
            HelpEntry::Section("SAMPLES"),
            HelpEntry::Blank,
            shortcut(Action::SaveSample),
            shortcut(Action::ExportSamples),
            shortcut(Action::CopyExport),
            HelpEntry::Blank,
            HelpEntry::Section("GENERAL"),
            HelpEntry::Blank,
            shortcut(Action::ToggleHelp),
            shortcut(Action::Cancel),
            shortcut(Action::Quit),
            HelpEntry::Blank,
            HelpEntry::Section("TIPS"),
            HelpEntry::Blank,
            HelpEntry::Tip("Saving clears the grid so the next digit starts blank"),
            HelpEntry::Tip("Save and Export buttons can also be clicked"),
            HelpEntry::Tip("Exports are one CSV row per sample: label first, then pixels"),
        ];

        Self {
            entries,
            scroll_offset: 0,
            closed: false,
        }
    }

    /// Number of content lines.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.entries.len()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines().saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.entries
            .iter()
            .map(|entry| match entry {
                HelpEntry::Section(title) => Line::from(Span::styled(
                    format!("═══ {title} ═══"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                HelpEntry::Shortcut { keys, description } => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<width$}", width = KEY_COLUMN),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(description.clone(), Style::default().fg(theme.text)),
                ]),
                HelpEntry::Tip(text) => Line::from(Span::styled(
                    format!("  • {text}"),
                    Style::default().fg(theme.text),
                )),
                HelpEntry::Blank => Line::from(""),
            })
            .collect()
    }
}

impl Component for HelpOverlay {
    type Event = HelpEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::PageUp => self.page_up(PAGE_SIZE),
            KeyCode::PageDown => self.page_down(PAGE_SIZE),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = self.total_lines().saturating_sub(1),
            KeyCode::Char('q' | '?') => {
                self.closed = true;
                return Some(HelpEvent::Close);
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Centered modal, 70% width, 80% height
        let width = (area.width * 70) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);
        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        f.render_widget(Clear, modal_area);

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(self.lines(theme))
            .block(
                Block::default()
                    .title(" Help - Esc to close, ↑↓ to scroll ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines().saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_entries_use_registry_keys() {
        let overlay = HelpOverlay::new(&ShortcutRegistry::new());
        assert!(overlay.entries.contains(&HelpEntry::Shortcut {
            keys: "Ctrl+S / Enter".to_string(),
            description: Action::SaveSample.description().to_string(),
        }));
        assert!(overlay.entries.contains(&HelpEntry::Shortcut {
            keys: "Ctrl+L".to_string(),
            description: Action::ClearGrid.description().to_string(),
        }));
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut overlay = HelpOverlay::new(&ShortcutRegistry::new());
        overlay.handle_input(key(KeyCode::Up));
        assert_eq!(overlay.scroll_offset, 0);

        overlay.handle_input(key(KeyCode::Down));
        assert_eq!(overlay.scroll_offset, 1);

        overlay.handle_input(key(KeyCode::End));
        assert_eq!(overlay.scroll_offset, overlay.total_lines() - 1);
        overlay.handle_input(key(KeyCode::Down));
        assert_eq!(overlay.scroll_offset, overlay.total_lines() - 1);

        overlay.handle_input(key(KeyCode::Home));
        assert_eq!(overlay.scroll_offset, 0);
    }

    #[test]
    fn test_close_keys() {
        let mut overlay = HelpOverlay::new(&ShortcutRegistry::new());
        assert!(!overlay.should_close());
        assert_eq!(
            overlay.handle_input(key(KeyCode::Char('q'))),
            Some(HelpEvent::Close)
        );
        assert!(overlay.should_close());
    }
}
