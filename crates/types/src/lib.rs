//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the game.
//! They carry no behavior beyond small accessors, so the engine, the input
//! mapper and the terminal renderer can all depend on them.
//!
//! # Board Dimensions
//!
//! The well size is chosen at start-up and fixed for the whole game:
//!
//! - **Default**: 10 columns x 20 rows
//! - **Allowed**: 8..=40 in either direction
//!
//! # Speed Curve
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 1000 | Fall interval at score 0 |
//! | `SPEED_STEP_POINTS` | 500 | Score needed for each speed step |
//! | `SPEED_FACTOR` | 0.9 | Interval multiplier per step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Color, GameAction};
//!
//! let cell = Cell::Filled(Color::Cyan);
//! assert!(cell.is_filled());
//! assert_eq!(cell.color(), Some(Color::Cyan));
//!
//! assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
//! ```

/// Default well width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default well height in cells
pub const DEFAULT_HEIGHT: usize = 20;

/// Narrowest well accepted by the game
pub const MIN_WIDTH: usize = 8;

/// Widest well accepted by the game
pub const MAX_WIDTH: usize = 40;

/// Shallowest well accepted by the game
pub const MIN_HEIGHT: usize = 8;

/// Deepest well accepted by the game
pub const MAX_HEIGHT: usize = 40;

/// Fall interval at score 0 (1000ms = one row per second)
pub const BASE_TICK_MS: f64 = 1000.0;

/// Points required for each speed step
pub const SPEED_STEP_POINTS: u32 = 500;

/// Interval multiplier applied per speed step (10% faster)
pub const SPEED_FACTOR: f64 = 0.9;

/// Points for every row the active piece falls
pub const MOVE_SCORE: u32 = 1;

/// Points for every piece locked into the grid
pub const LOCK_SCORE: u32 = 2;

/// Side length of the next-piece preview panel
pub const PREVIEW_SIZE: usize = 4;

/// The nine colors a piece can be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Orange,
    Grey,
    Brown,
    Cyan,
    Magenta,
}

impl Color {
    /// Full palette in draw order
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Orange,
        Color::Grey,
        Color::Brown,
        Color::Cyan,
        Color::Magenta,
    ];

    /// 24-bit RGB value used by the terminal renderer
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (220, 60, 60),
            Color::Green => (90, 200, 90),
            Color::Yellow => (235, 215, 70),
            Color::Blue => (70, 110, 220),
            Color::Orange => (255, 160, 30),
            Color::Grey => (150, 150, 150),
            Color::Brown => (150, 95, 50),
            Color::Cyan => (70, 210, 210),
            Color::Magenta => (210, 80, 210),
        }
    }
}

/// The seven piece shapes
///
/// Variant order matches the template table the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    O,
    S,
    Z,
    I,
    L,
    J,
}

impl ShapeKind {
    /// All shapes in template order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Lowercase shape letter for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::T => "t",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::I => "i",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

/// A cell of the grid
///
/// - `Empty`: nothing there
/// - `Filled(color)`: part of a locked piece with that color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Color of a filled cell, `None` when empty
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// Result of asking whether the active piece can fall one row
///
/// - **CanMove**: nothing below, the piece may descend
/// - **HitsBottom**: the piece rests on the floor or on locked cells and must lock
/// - **HitsTop**: the piece rests on locked cells while still at row 0, the well is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    CanMove,
    HitsBottom,
    HitsTop,
}

/// Player actions accepted by the engine
///
/// Keyboard and pointer input are both reduced to these four calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece 90° clockwise in place
    Rotate,
    /// Let the active piece fall until it rests
    Drop,
}

impl GameAction {
    /// camelCase action name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
        }
    }
}
