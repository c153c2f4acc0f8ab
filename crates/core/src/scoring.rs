//! Scoring module - line-clear points and the speed curve
//!
//! - Line clears score `lines² × width`, counted once per lock
//! - Every row fallen scores `MOVE_SCORE`, every lock scores `LOCK_SCORE`
//! - The fall interval shrinks by 10% for each 500 points

use std::time::Duration;

use crate::types::{BASE_TICK_MS, SPEED_FACTOR, SPEED_STEP_POINTS};

/// Points for clearing `lines` rows at once on a grid `width` cells wide
///
/// # Examples
///
/// ```
/// use blockfall_core::line_clear_score;
///
/// assert_eq!(line_clear_score(0, 10), 0);
/// assert_eq!(line_clear_score(1, 10), 10);
/// assert_eq!(line_clear_score(2, 10), 40);
/// assert_eq!(line_clear_score(4, 10), 160);
/// ```
pub fn line_clear_score(lines: u32, width: usize) -> u32 {
    lines * lines * width as u32
}

/// Speed step reached at `score` (0 at the start)
pub fn speed_step(score: u32) -> u32 {
    score / SPEED_STEP_POINTS
}

/// Fall interval in milliseconds for a given score
///
/// `1000 * 0.9^floor(score / 500)`, recomputed from scratch every call.
pub fn tick_interval_ms(score: u32) -> f64 {
    let step = speed_step(score).min(i32::MAX as u32) as i32;
    BASE_TICK_MS * SPEED_FACTOR.powi(step)
}

/// Fall interval as a [`Duration`] for the driving loop
pub fn tick_interval(score: u32) -> Duration {
    Duration::from_secs_f64(tick_interval_ms(score) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LOCK_SCORE, MOVE_SCORE};
    use proptest::prelude::*;

    #[test]
    fn line_clear_is_quadratic() {
        assert_eq!(line_clear_score(1, 10), 10);
        assert_eq!(line_clear_score(2, 10), 40);
        assert_eq!(line_clear_score(3, 10), 90);
        assert_eq!(line_clear_score(3, 12), 108);
    }

    #[test]
    fn interval_steps_every_500_points() {
        assert_eq!(tick_interval_ms(0), 1000.0);
        assert_eq!(tick_interval_ms(499), 1000.0);
        assert_eq!(tick_interval_ms(500), 1000.0 * 0.9f64.powi(1));
        assert_eq!(tick_interval_ms(999), 1000.0 * 0.9f64.powi(1));
        assert_eq!(tick_interval_ms(1000), 1000.0 * 0.9f64.powi(2));
    }

    #[test]
    fn interval_never_increases() {
        let mut last = tick_interval_ms(0);
        for score in (0..20_000).step_by(37) {
            let next = tick_interval_ms(score);
            assert!(next <= last);
            last = next;
        }
    }

    #[test]
    fn interval_duration_matches_ms() {
        assert_eq!(tick_interval(0), Duration::from_millis(1000));
        assert_eq!(tick_interval(500), Duration::from_millis(900));
    }

    #[test]
    fn per_event_points() {
        assert_eq!(MOVE_SCORE, 1);
        assert_eq!(LOCK_SCORE, 2);
    }

    proptest! {
        #[test]
        fn interval_matches_repeated_slowdown(score in 0u32..100_000) {
            let mut expected = BASE_TICK_MS;
            for _ in 0..score / SPEED_STEP_POINTS {
                expected *= SPEED_FACTOR;
            }
            let got = tick_interval_ms(score);
            prop_assert!((got - expected).abs() < 1e-9, "{} vs {}", got, expected);
        }
    }
}
