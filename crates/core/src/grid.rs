//! Grid module - the well that pieces fall into
//!
//! The grid is `height` rows by `width` columns, stored as a flat row-major
//! vector. Coordinates are `(row, col)` with row 0 at the top.
//! Anything outside the grid reads as occupied, so the walls and the floor
//! behave like locked cells.

use crate::pieces::Piece;
use crate::types::{Cell, Color};

/// The game grid with dimensions fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Build a grid from rows of cells
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "grid rows must have equal length"
        );
        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (row, col) is filled or outside the grid
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        !matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        self.row(row).iter().all(Cell::is_filled)
    }

    /// Empty one row and shift every row above it down by one
    ///
    /// Row 0 ends up empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.height {
            return;
        }
        let width = self.width;

        for y in (1..=row).rev() {
            let src_start = (y - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, y * width);
        }
        self.cells[..width].fill(Cell::Empty);
    }

    /// Clear every full row in a single top-to-bottom sweep
    ///
    /// Each full row is cleared as soon as it is found, on the grid as it is
    /// at that moment. Returns the number of rows cleared.
    pub fn remove_full_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..self.height {
            if self.is_row_full(row) {
                cleared += 1;
                self.clear_row(row);
            }
        }
        cleared
    }

    /// Write every filled sub-cell of `piece` into the grid with its color
    ///
    /// Cells outside the grid are skipped. Returns the number of cells written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let color = piece.color;
        let mut written = 0;
        for (row, col) in piece.cells() {
            if self.set(row, col, Cell::Filled(color)) {
                written += 1;
            }
        }
        written
    }

    /// Fill a whole row with one color except for the listed columns
    pub fn fill_row_except(&mut self, row: usize, color: Color, holes: &[usize]) {
        for col in 0..self.width {
            if !holes.contains(&col) {
                self.set(row, col, Cell::Filled(color));
            }
        }
    }

    /// Number of filled cells on the grid
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }
}
