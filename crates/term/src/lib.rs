//! Terminal "game renderer" module.
//!
//! Renders engine snapshots into an off-screen [`FrameBuffer`] and writes
//! finished frames to the terminal through crossterm. Only
//! [`TerminalRenderer`] touches the terminal; the view is plain data in,
//! glyphs out.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, BlockSize, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
