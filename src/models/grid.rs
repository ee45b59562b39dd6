//! Pixel grid and cell addressing.

use serde::{Deserialize, Serialize};

/// Cell address in the pixel grid.
///
/// Rows grow downwards and columns grow to the right, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0-based)
    pub row: u8,
    /// Column index (0-based)
    pub col: u8,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Fixed-size binary pixel grid.
///
/// Cells are stored row-major. `true` is a black (inked) cell, `false` a
/// white one. The dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u8,
    cols: u8,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-white grid of `rows` × `cols` cells.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows as usize * cols as usize],
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` addresses a cell inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Reads a cell. Returns `None` when `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Writes a cell.
    ///
    /// Returns `false` and leaves the grid untouched when `pos` is out of range.
    pub fn set(&mut self, pos: Position, value: bool) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Resets every cell to white.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Whether every cell is white.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Number of black cells.
    #[must_use]
    pub fn inked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Row-major view of the cells.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterates over the grid one row at a time.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on 0, and a zero-column grid has no cells anyway
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Flattens the grid row-major into 0/1 values.
    #[must_use]
    pub fn flatten(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| u8::from(cell)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(6, 9);
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 9);
        assert_eq!(grid.len(), 54);
        assert!(grid.is_blank());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 4);
        assert!(grid.set(Position::new(2, 3), true));
        assert_eq!(grid.get(Position::new(2, 3)), Some(true));
        assert_eq!(grid.get(Position::new(0, 0)), Some(false));
        assert_eq!(grid.inked_count(), 1);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut grid = Grid::new(3, 4);
        assert!(!grid.set(Position::new(3, 0), true));
        assert!(!grid.set(Position::new(0, 4), true));
        assert!(grid.is_blank());
        assert_eq!(grid.get(Position::new(3, 0)), None);
    }

    #[test]
    fn test_flatten_is_row_major() {
        let mut grid = Grid::new(2, 3);
        grid.set(Position::new(0, 1), true);
        grid.set(Position::new(1, 2), true);
        assert_eq!(grid.flatten(), vec![0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = Grid::new(6, 9);
        grid.set(Position::new(5, 8), true);
        grid.clear();
        assert!(grid.is_blank());
        assert_eq!((grid.rows(), grid.cols()), (6, 9));
    }

    #[test]
    fn test_iter_rows() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(1, 0), true);
        let rows: Vec<&[bool]> = grid.iter_rows().collect();
        assert_eq!(rows, vec![&[false, false][..], &[true, false][..]]);
    }
}
