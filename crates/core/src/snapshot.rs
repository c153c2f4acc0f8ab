//! Snapshot module - read-only game state handed to renderers

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::types::{Cell, Color, ShapeKind, PREVIEW_SIZE};

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Piece,
    pub next: Piece,
    pub score: u32,
    pub game_over: bool,
    pub tick_interval_ms: f64,
    pub lines_cleared: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Cell as drawn: the active piece painted over the locked grid
    pub fn visible_cell(&self, row: usize, col: usize) -> Cell {
        let active = &self.active;
        if row >= active.row
            && col >= active.col
            && active.mask().is_filled(row - active.row, col - active.col)
        {
            return Cell::Filled(active.color);
        }
        self.grid.get(row, col).unwrap_or_default()
    }

    /// Next piece clipped into the fixed preview square
    pub fn preview(&self) -> [[Option<Color>; PREVIEW_SIZE]; PREVIEW_SIZE] {
        let mut out = [[None; PREVIEW_SIZE]; PREVIEW_SIZE];
        let mask = self.next.mask();
        for (r, row) in out.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                if mask.is_filled(r, c) {
                    *slot = Some(self.next.color);
                }
            }
        }
        out
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: Grid::new(0, 0),
            active: Piece::new(ShapeKind::O, Color::Grey),
            next: Piece::new(ShapeKind::O, Color::Grey),
            score: 0,
            game_over: false,
            tick_interval_ms: crate::types::BASE_TICK_MS,
            lines_cleared: 0,
            pieces_locked: 0,
        }
    }
}
