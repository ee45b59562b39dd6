//! Pixel grid widget and terminal-to-cell hit testing.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::{AppState, Theme};
use crate::editor::PaintState;
use crate::models::{Grid, Position};

/// Terminal columns per cell. Two columns make cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Where the grid's cells sit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Terminal column of the top-left cell
    pub origin_x: u16,
    /// Terminal row of the top-left cell
    pub origin_y: u16,
    /// Grid rows
    pub rows: u8,
    /// Grid columns
    pub cols: u8,
}

impl GridGeometry {
    /// Centers a `rows` × `cols` grid inside `area`.
    ///
    /// Returns `None` when the grid does not fit.
    #[must_use]
    pub fn fit(area: Rect, rows: u8, cols: u8) -> Option<Self> {
        let width = u16::from(cols) * CELL_WIDTH;
        let height = u16::from(rows);
        if width > area.width || height > area.height {
            return None;
        }

        Some(Self {
            origin_x: area.x + (area.width - width) / 2,
            origin_y: area.y + (area.height - height) / 2,
            rows,
            cols,
        })
    }

    /// Screen rectangle covered by all cells.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            u16::from(self.cols) * CELL_WIDTH,
            u16::from(self.rows),
        )
    }

    /// Screen rectangle of one cell.
    #[must_use]
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.origin_x + u16::from(pos.col) * CELL_WIDTH,
            self.origin_y + u16::from(pos.row),
            CELL_WIDTH,
            1,
        )
    }

    /// Cell under the terminal coordinate (`column`, `row`), if any.
    #[must_use]
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let dx = column.checked_sub(self.origin_x)?;
        let dy = row.checked_sub(self.origin_y)?;
        let col = dx / CELL_WIDTH;
        if col >= u16::from(self.cols) || dy >= u16::from(self.rows) {
            return None;
        }
        Some(Position::new(dy as u8, col as u8))
    }
}

/// Paints grid cells into a buffer.
pub struct PixelGridView<'a> {
    grid: &'a Grid,
    theme: &'a Theme,
    geometry: GridGeometry,
}

impl<'a> PixelGridView<'a> {
    /// Creates a view of `grid` laid out by `geometry`.
    #[must_use]
    pub const fn new(grid: &'a Grid, theme: &'a Theme, geometry: GridGeometry) -> Self {
        Self {
            grid,
            theme,
            geometry,
        }
    }
}

impl Widget for PixelGridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, cells) in self.grid.iter_rows().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let rect = self
                    .geometry
                    .cell_rect(Position::new(row as u8, col as u8))
                    .intersection(area);
                if rect.is_empty() {
                    continue;
                }
                let style = Style::default().bg(self.theme.cell_color(value));
                buf.set_style(rect, style);
            }
        }
    }
}

/// Pixel grid panel
pub struct PixelGridWidget;

impl PixelGridWidget {
    /// Geometry of `grid` when the panel occupies `area`.
    #[must_use]
    pub fn geometry(area: Rect, grid: &Grid) -> Option<GridGeometry> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        GridGeometry::fit(inner, grid.rows(), grid.cols())
    }

    /// Render the grid panel with its border and paint-mode title
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let grid = state.editor.grid();

        let mode = match state.editor.paint_state() {
            PaintState::Idle => String::new(),
            PaintState::Painting(true) => "· drawing ".to_string(),
            PaintState::Painting(false) => "· erasing ".to_string(),
        };
        let block = Block::default()
            .title(format!(" Grid {}×{} {mode}", grid.rows(), grid.cols()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        match Self::geometry(area, grid) {
            Some(geometry) => {
                f.render_widget(PixelGridView::new(grid, theme, geometry), inner);
            }
            None => {
                let message = Paragraph::new("Terminal too small for the grid")
                    .alignment(Alignment::Center)
                    .style(
                        Style::default()
                            .fg(theme.warning)
                            .add_modifier(Modifier::BOLD),
                    );
                f.render_widget(message, inner);
            }
        }
    }
}
