//! Touch zones
//!
//! ```text
//!  30%     70%
//!   |  UP  |
//! --+------+-- 30%
//!   |      |
//! L |      | R
//!   |      |
//! --+------+-- 70%
//!   | DOWN |
//! ```
//!
//! Corners and the center map to nothing.

use crate::types::GameAction;

/// Fraction of the viewport where the near band ends
const NEAR: f32 = 0.3;

/// Fraction of the viewport where the far band starts
const FAR: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    Top,
    Left,
    Right,
    Bottom,
}

impl TouchZone {
    /// Classify a point inside a `width` x `height` viewport
    pub fn classify(x: f32, y: f32, width: f32, height: f32) -> Option<Self> {
        let left = NEAR * width;
        let right = FAR * width;
        let top = NEAR * height;
        let bottom = FAR * height;

        let mid_x = left < x && x < right;
        let mid_y = top < y && y < bottom;

        if mid_x && y < top {
            Some(TouchZone::Top)
        } else if x < left && mid_y {
            Some(TouchZone::Left)
        } else if x > right && mid_y {
            Some(TouchZone::Right)
        } else if mid_x && y > bottom {
            Some(TouchZone::Bottom)
        } else {
            None
        }
    }

    pub fn action(&self) -> GameAction {
        match self {
            TouchZone::Top => GameAction::Rotate,
            TouchZone::Left => GameAction::MoveLeft,
            TouchZone::Right => GameAction::MoveRight,
            TouchZone::Bottom => GameAction::Drop,
        }
    }
}

/// Map a touch point straight to an action
pub fn touch_action(x: f32, y: f32, width: f32, height: f32) -> Option<GameAction> {
    TouchZone::classify(x, y, width, height).map(|zone| zone.action())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_on_100_by_100() {
        assert_eq!(touch_action(50.0, 10.0, 100.0, 100.0), Some(GameAction::Rotate));
        assert_eq!(touch_action(10.0, 50.0, 100.0, 100.0), Some(GameAction::MoveLeft));
        assert_eq!(touch_action(90.0, 50.0, 100.0, 100.0), Some(GameAction::MoveRight));
        assert_eq!(touch_action(50.0, 90.0, 100.0, 100.0), Some(GameAction::Drop));
    }

    #[test]
    fn corners_and_center_are_dead() {
        assert_eq!(touch_action(10.0, 10.0, 100.0, 100.0), None);
        assert_eq!(touch_action(90.0, 90.0, 100.0, 100.0), None);
        assert_eq!(touch_action(50.0, 50.0, 100.0, 100.0), None);
    }

    #[test]
    fn zone_edges_are_exclusive() {
        assert_eq!(TouchZone::classify(30.0, 10.0, 100.0, 100.0), None);
        assert_eq!(TouchZone::classify(10.0, 70.0, 100.0, 100.0), None);
    }
}
