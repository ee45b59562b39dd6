//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow clone assignment patterns - common in UI state management
#![allow(clippy::assigning_clones)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod component;
pub mod control_bar;
pub mod handlers;
pub mod help_overlay;
pub mod pixel_grid;
pub mod status_bar;
pub mod theme;
pub mod toast;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::editor::GridEditor;
use crate::shortcuts::ShortcutRegistry;

pub use component::Component;
pub use control_bar::ControlBar;
pub use help_overlay::HelpOverlay;
pub use pixel_grid::{GridGeometry, PixelGridWidget};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use toast::ToastWidget;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar
    pub title: Rect,
    /// Grid panel
    pub grid: Rect,
    /// Clear / Save / Export buttons
    pub controls: Rect,
    /// Status bar
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into regions.
    #[must_use]
    pub fn split(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(8),    // Grid
                Constraint::Length(3), // Buttons
                Constraint::Length(6), // Status bar (label + message + samples + help)
            ])
            .split(area);

        Self {
            title: chunks[0],
            grid: chunks[1],
            controls: chunks[2],
            status: chunks[3],
        }
    }
}

/// Application state
pub struct AppState {
    /// Grid, label, samples and toast
    pub editor: GridEditor,
    /// Loaded configuration
    pub config: Config,
    /// Resolved color theme
    pub theme: Theme,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,

    // UI state
    /// Status bar message
    pub status_message: String,
    /// Foreground color for the status message, if not the default
    pub status_color_override: Option<Color>,
    /// Error shown in the error overlay
    pub error_message: Option<String>,
    /// Open help overlay
    pub help: Option<HelpOverlay>,
    /// Terminal area of the last drawn frame, used for mouse hit testing
    pub viewport: Rect,

    // System state
    /// Set once the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new `AppState` from configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        let editor = GridEditor::new(config.grid.rows, config.grid.cols)
            .with_toast_duration(config.ui.toast_duration())
            .with_export_file_name(config.export.file_name.clone());
        let theme = Theme::from_mode(config.ui.theme_mode);
        let shortcuts = ShortcutRegistry::new();
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlay::new(&shortcuts));

        Self {
            editor,
            config,
            theme,
            shortcuts,
            status_message: "Draw with the mouse, type a digit, press Enter to save".to_string(),
            status_color_override: None,
            error_message: None,
            help,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = None;
    }

    /// Set status message with custom foreground color (used for warnings)
    pub fn set_status_with_style(&mut self, message: impl Into<String>, color: Color) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = Some(color);
    }

    /// Set error message. The overlay ends any stroke in progress.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.editor.on_pointer_leave();
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Open the help overlay, ending any stroke in progress
    pub fn open_help(&mut self) {
        self.editor.on_pointer_leave();
        self.help = Some(HelpOverlay::new(&self.shortcuts));
    }

    /// Tears the editor down once the event loop has ended, however it ended.
    pub fn shutdown(&mut self) {
        self.editor.teardown();
        tracing::info!(samples = self.editor.samples().len(), "editor closed");
    }

    /// Screen regions of the last drawn frame.
    #[must_use]
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::split(self.viewport)
    }

    /// Where grid cells sit on screen, if the grid fits.
    #[must_use]
    pub fn grid_geometry(&self) -> Option<GridGeometry> {
        PixelGridWidget::geometry(self.layout().grid, self.editor.grid())
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Fire the toast's dismiss once it is due
        state.editor.tick(Instant::now());

        terminal.draw(|f| {
            state.viewport = f.area();
            render(f, state);
        })?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            let quit = match event::read()? {
                Event::Key(key) => handle_key_event(state, key)?,
                Event::Mouse(mouse) => handlers::handle_mouse_input(state, mouse)?,
                // Resize re-renders on the next pass
                _ => false,
            };
            if quit {
                break;
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = ScreenLayout::split(f.area());

    render_title_bar(f, layout.title, state);
    PixelGridWidget::render(f, layout.grid, state);
    ControlBar::render(f, layout.controls, state);
    StatusBar::render(f, layout.status, state, &state.theme);

    ToastWidget::render(f, state.editor.toast(), &state.theme);

    if let Some(help) = &state.help {
        let area = f.area();
        help.render(f, area, &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with grid size and sample count
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let grid = state.editor.grid();
    let title = format!(
        " {APP_NAME} - {}×{} grid - {} saved",
        grid.rows(),
        grid.cols(),
        state.editor.samples().len()
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // Release and repeat events would type label characters twice on some platforms
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    if state.help.is_some() {
        return handlers::handle_help_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
