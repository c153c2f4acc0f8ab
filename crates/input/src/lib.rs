//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events onto the four
//! [`crate::types::GameAction`] calls the engine understands. A mouse press is
//! treated like a touch on a phone screen: the viewport is split into zones
//! and each zone stands for one action.

pub mod map;
pub mod touch;

pub use blockfall_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
pub use touch::{touch_action, TouchZone};
