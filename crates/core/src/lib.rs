//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole game engine: the grid, piece masks, collision
//! queries, line clearing, scoring and the tick state machine. It has **no
//! dependencies** on terminals, input devices or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a plain function or method on owned data
//! - **Portable**: any driver (terminal loop, test harness, benchmark) can own a game
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size well with row clearing and merging
//! - [`pieces`]: shape templates, masks and clockwise rotation
//! - [`collision`]: move/rotate queries and the three-way fall status
//! - [`scoring`]: line-clear points and the speed curve
//! - [`rng`]: uniform random shape and color generation
//! - [`game_state`]: the engine tying everything together
//! - [`snapshot`]: read-only state handed to renderers
//!
//! # Game Rules
//!
//! - Pieces fall one row per tick; each row fallen scores 1 point
//! - A piece that cannot fall is merged into the grid for 2 points
//! - Clearing `n` rows at once scores `n² × width`
//! - The tick interval is `1000ms × 0.9^floor(score / 500)`
//! - A piece that cannot leave row 0 ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, MoveStatus};
//!
//! let mut game = GameState::new(10, 20, 12345);
//!
//! assert_eq!(game.tick(), MoveStatus::CanMove);
//! assert_eq!(game.score(), 1);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::Drop);
//!
//! assert!(game.score() > 1);
//! ```

pub mod collision;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{can_move_down, can_move_left, can_move_right, can_rotate};
pub use game_state::{spawn_column, GameState};
pub use grid::Grid;
pub use pieces::{template, Mask, Piece};
pub use rng::PieceGenerator;
pub use scoring::{line_clear_score, tick_interval, tick_interval_ms};
pub use snapshot::GameSnapshot;
