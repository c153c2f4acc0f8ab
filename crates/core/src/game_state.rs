//! Game state module - the engine the driver talks to
//!
//! Ties together grid, pieces, generator and scoring. Every public mutator is
//! synchronous and bounded by the grid size; the driving loop decides when to
//! tick and when to repaint.
//!
//! # Tick transitions
//!
//! | status | effect |
//! |--------|--------|
//! | `CanMove` | active piece falls one row, +1 point |
//! | `HitsBottom` | merge, clear full rows, promote next, +2 points |
//! | `HitsTop` | game over, nothing else changes |

use std::time::Duration;

use log::{debug, info};

use crate::collision::{can_move_down, can_move_left, can_move_right, can_rotate};
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{line_clear_score, tick_interval, tick_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, MoveStatus, LOCK_SCORE, MOVE_SCORE};

/// Spawn column for a piece `piece_width` wide: `floor(width/2 - piece_width/2)`
pub fn spawn_column(width: usize, piece_width: usize) -> usize {
    width.saturating_sub(piece_width) / 2
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Piece,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    game_over: bool,
    tick_interval_ms: f64,
    lines_cleared: u32,
    pieces_locked: u32,
}

impl GameState {
    /// Create a new game on an empty `width` x `height` grid
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self::with_generator(width, height, PieceGenerator::new(seed))
    }

    /// Create a new game with an already constructed generator
    ///
    /// The first active piece is centered on its own width. The first next
    /// piece gets its column from the active piece's width, like every next
    /// piece after it.
    pub fn with_generator(width: usize, height: usize, mut generator: PieceGenerator) -> Self {
        let mut active = generator.next_piece();
        active.col = spawn_column(width, active.width());
        let mut next = generator.next_piece();
        next.col = spawn_column(width, active.width());

        debug!(
            "new game {}x{}: active={} next={}",
            width,
            height,
            active.kind.as_str(),
            next.kind.as_str()
        );
        Self::from_parts(Grid::new(width, height), active, next, generator)
    }

    /// Assemble a game from explicit parts
    ///
    /// Pieces are used exactly as given, anchors included.
    pub fn from_parts(grid: Grid, active: Piece, next: Piece, generator: PieceGenerator) -> Self {
        Self {
            grid,
            active,
            next,
            generator,
            score: 0,
            game_over: false,
            tick_interval_ms: tick_interval_ms(0),
            lines_cleared: 0,
            pieces_locked: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Current fall interval in milliseconds
    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    /// Current fall interval for the driving loop's timer
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.score)
    }

    pub fn can_move_left(&self) -> bool {
        can_move_left(&self.active, &self.grid)
    }

    pub fn can_move_right(&self) -> bool {
        can_move_right(&self.active, &self.grid)
    }

    pub fn can_move_down(&self) -> MoveStatus {
        can_move_down(&self.active, &self.grid)
    }

    pub fn can_rotate(&self) -> bool {
        can_rotate(&self.active, &self.grid)
    }

    /// Advance the game by one step
    ///
    /// Returns the status that was acted on. A finished game is left alone
    /// and reports [`MoveStatus::HitsTop`].
    pub fn tick(&mut self) -> MoveStatus {
        if self.game_over {
            return MoveStatus::HitsTop;
        }

        let status = self.can_move_down();
        match status {
            MoveStatus::CanMove => {
                self.active.row += 1;
                self.score += MOVE_SCORE;
            }
            MoveStatus::HitsBottom => {
                self.lock_active();
                self.score += LOCK_SCORE;
            }
            MoveStatus::HitsTop => {
                self.game_over = true;
                info!(
                    "game over: score={} lines={} pieces={}",
                    self.score, self.lines_cleared, self.pieces_locked
                );
            }
        }

        self.tick_interval_ms = tick_interval_ms(self.score);
        status
    }

    /// Merge the active piece, clear rows, and bring in the next piece
    fn lock_active(&mut self) {
        self.grid.merge(&self.active);
        self.pieces_locked += 1;
        debug!(
            "locked {} at ({}, {})",
            self.active.kind.as_str(),
            self.active.row,
            self.active.col
        );

        let lines = self.grid.remove_full_lines();
        self.score += line_clear_score(lines, self.grid.width());
        if lines > 0 {
            self.lines_cleared += lines;
            info!(
                "cleared {} line(s) for {} points",
                lines,
                line_clear_score(lines, self.grid.width())
            );
        }

        self.promote_next();
    }

    /// Next becomes active; a fresh next takes its column from the new active width
    fn promote_next(&mut self) {
        let fresh = self.generator.next_piece();
        self.active = std::mem::replace(&mut self.next, fresh);
        self.next.col = spawn_column(self.grid.width(), self.active.width());
        debug!(
            "spawned {} at column {}, next {}",
            self.active.kind.as_str(),
            self.active.col,
            self.next.kind.as_str()
        );
    }

    /// Shift the active piece one column left if nothing is in the way
    pub fn move_left(&mut self) -> bool {
        if self.game_over || !self.can_move_left() {
            return false;
        }
        self.active.col -= 1;
        true
    }

    /// Shift the active piece one column right if nothing is in the way
    pub fn move_right(&mut self) -> bool {
        if self.game_over || !self.can_move_right() {
            return false;
        }
        self.active.col += 1;
        true
    }

    /// Turn the active piece clockwise if it fits where it stands
    pub fn rotate(&mut self) -> bool {
        if self.game_over || !self.can_rotate() {
            return false;
        }
        self.active.rotate();
        true
    }

    /// Tick repeatedly until the active piece can no longer fall
    ///
    /// Always ticks at least once, so a piece that is already resting locks
    /// and the freshly spawned piece drops as well. Returns the number of
    /// ticks taken.
    pub fn soft_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let mut ticks = 0;
        loop {
            self.tick();
            ticks += 1;
            if self.can_move_down() != MoveStatus::CanMove {
                break;
            }
        }
        ticks
    }

    /// Apply a player action
    ///
    /// Returns whether the state changed. Ignored once the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::Drop => self.soft_drop() > 0,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.active.clone_from(&self.active);
        out.next.clone_from(&self.next);
        out.score = self.score;
        out.game_over = self.game_over;
        out.tick_interval_ms = self.tick_interval_ms;
        out.lines_cleared = self.lines_cleared;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Color, ShapeKind};

    fn game_with(active: Piece) -> GameState {
        GameState::from_parts(
            Grid::new(10, 20),
            active,
            Piece::new(ShapeKind::O, Color::Green),
            PieceGenerator::new(1),
        )
    }

    #[test]
    fn spawn_column_floors() {
        assert_eq!(spawn_column(10, 3), 3);
        assert_eq!(spawn_column(10, 2), 4);
        assert_eq!(spawn_column(10, 1), 4);
        assert_eq!(spawn_column(9, 2), 3);
        assert_eq!(spawn_column(10, 4), 3);
    }

    #[test]
    fn new_game_centers_first_piece() {
        let game = GameState::new(10, 20, 99);
        let active = game.active();
        assert_eq!(active.row, 0);
        assert_eq!(active.col, spawn_column(10, active.width()));
        assert_eq!(game.next().col, spawn_column(10, active.width()));
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
        assert_eq!(game.tick_interval_ms(), 1000.0);
    }

    #[test]
    fn promoted_piece_keeps_column_from_generation_time() {
        let mut game = GameState::new(10, 20, 5);
        let first_width = game.active().width();
        let expected_col = spawn_column(10, first_width);
        let next_kind = game.next().kind;

        game.soft_drop();
        while game.pieces_locked() == 0 {
            game.tick();
        }

        assert_eq!(game.active().kind, next_kind);
        assert_eq!(game.active().col, expected_col);
        assert_eq!(game.next().col, spawn_column(10, game.active().width()));
    }

    #[test]
    fn lock_adds_two_points_and_promotes() {
        let active = Piece::new(ShapeKind::O, Color::Red).at(18, 0);
        let mut game = game_with(active);

        assert_eq!(game.tick(), MoveStatus::HitsBottom);
        assert_eq!(game.score(), LOCK_SCORE);
        assert_eq!(game.grid().get(19, 0), Some(Cell::Filled(Color::Red)));
        assert_eq!(game.active().kind, ShapeKind::O);
        assert_eq!(game.active().color, Color::Green);
        assert_eq!(game.pieces_locked(), 1);
    }

    #[test]
    fn finished_game_ignores_everything() {
        let mut grid = Grid::new(10, 20);
        grid.fill_row_except(2, Color::Grey, &[9]);
        let active = Piece::new(ShapeKind::O, Color::Red).at(0, 4);
        let mut game = GameState::from_parts(
            grid,
            active,
            Piece::new(ShapeKind::O, Color::Green),
            PieceGenerator::new(1),
        );

        assert_eq!(game.tick(), MoveStatus::HitsTop);
        assert!(game.game_over());

        let before = game.snapshot();
        assert_eq!(game.tick(), MoveStatus::HitsTop);
        assert!(!game.move_left());
        assert!(!game.move_right());
        assert!(!game.rotate());
        assert_eq!(game.soft_drop(), 0);
        assert!(!game.apply_action(GameAction::Drop));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn soft_drop_stops_when_resting() {
        let active = Piece::new(ShapeKind::I, Color::Cyan).at(0, 0);
        let mut game = game_with(active);

        let ticks = game.soft_drop();
        assert_eq!(ticks, 16);
        assert_eq!(game.active().row, 16);
        assert_eq!(game.can_move_down(), MoveStatus::HitsBottom);
        assert_eq!(game.score(), 16);
        assert_eq!(game.pieces_locked(), 0);
    }

    #[test]
    fn soft_drop_on_resting_piece_locks_and_drops_next() {
        let active = Piece::new(ShapeKind::I, Color::Cyan).at(16, 0);
        let next = Piece::new(ShapeKind::O, Color::Green).at(0, 4);
        let mut game = GameState::from_parts(Grid::new(10, 20), active, next, PieceGenerator::new(1));

        game.soft_drop();
        assert_eq!(game.pieces_locked(), 1);
        assert_eq!(game.active().kind, ShapeKind::O);
        assert_eq!(game.active().row, 18);
        assert_eq!(game.score(), LOCK_SCORE + 18);
    }

    #[test]
    fn tick_interval_follows_score_after_big_clear() {
        let mut grid = Grid::new(40, 20);
        for row in 16..20 {
            grid.fill_row_except(row, Color::Grey, &[0]);
        }
        let active = Piece::new(ShapeKind::I, Color::Cyan).at(16, 0);
        let mut game = GameState::from_parts(
            grid,
            active,
            Piece::new(ShapeKind::O, Color::Green),
            PieceGenerator::new(1),
        );
        assert_eq!(game.tick_interval(), Duration::from_millis(1000));

        game.tick();
        assert_eq!(game.score(), 16 * 40 + LOCK_SCORE);
        assert_eq!(game.tick_interval_ms(), 900.0);
        assert_eq!(game.tick_interval(), Duration::from_millis(900));
    }
}
