//! Pieces module - shape masks, templates and rotation
//!
//! A piece is described by a rectangular boolean mask (its bounding box) plus
//! an anchor in grid coordinates. Rotation always re-derives the mask from the
//! bounding box, there is no pivot and no kick table.

use crate::types::{Color, ShapeKind};

/// Rectangular boolean mask, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    height: usize,
    width: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask from rows of 0/1 values
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows differ in length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty(), "mask needs at least one row");
        let width = rows[0].len();
        assert!(width > 0, "mask needs at least one column");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "mask rows must have equal length"
        );

        let bits = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| v != 0))
            .collect();
        Self {
            height: rows.len(),
            width,
            bits,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether sub-cell (row, col) is filled; out of range reads as empty
    #[inline(always)]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.bits[row * self.width + col]
    }

    /// Iterate filled sub-cells as (row, col), row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Return the mask turned 90° clockwise
    ///
    /// An h x w mask becomes w x h with `new[y][x] = old[h - x - 1][y]`.
    pub fn rotated(&self) -> Mask {
        let new_height = self.width;
        let new_width = self.height;
        let mut bits = Vec::with_capacity(self.bits.len());
        for y in 0..new_height {
            for x in 0..new_width {
                bits.push(self.is_filled(new_width - x - 1, y));
            }
        }
        Mask {
            height: new_height,
            width: new_width,
            bits,
        }
    }
}

/// Template mask for a shape kind
pub fn template(kind: ShapeKind) -> Mask {
    match kind {
        ShapeKind::T => Mask::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        ShapeKind::O => Mask::from_rows(&[&[1, 1], &[1, 1]]),
        ShapeKind::S => Mask::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        ShapeKind::Z => Mask::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        ShapeKind::I => Mask::from_rows(&[&[1], &[1], &[1], &[1]]),
        ShapeKind::L => Mask::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]),
        ShapeKind::J => Mask::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]),
    }
}

/// A piece instance: current mask, color and top-left anchor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub color: Color,
    pub row: usize,
    pub col: usize,
    mask: Mask,
}

impl Piece {
    /// Create a piece from its template, anchored at (0, 0)
    pub fn new(kind: ShapeKind, color: Color) -> Self {
        Self {
            kind,
            color,
            row: 0,
            col: 0,
            mask: template(kind),
        }
    }

    /// Place the piece at the given anchor
    pub fn at(mut self, row: usize, col: usize) -> Self {
        self.row = row;
        self.col = col;
        self
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn height(&self) -> usize {
        self.mask.height()
    }

    pub fn width(&self) -> usize {
        self.mask.width()
    }

    /// Filled cells in grid coordinates as (row, col)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mask
            .filled_cells()
            .map(move |(r, c)| (self.row + r, self.col + c))
    }

    /// Mask this piece would have after one clockwise turn
    pub fn rotated_mask(&self) -> Mask {
        self.mask.rotated()
    }

    /// Turn the piece clockwise in place, keeping its anchor
    pub fn rotate(&mut self) {
        self.mask = self.mask.rotated();
    }
}
