//! Scoring module - line clear points, levels and fall speed
//!
//! - Points come from `LINE_SCORES` keyed by the rows removed in a single
//!   lock, multiplied by the level at which they were cleared.
//! - Level is `total_lines / 10 + 1`.
//! - Fall interval drops by 50ms per level, floored at 50ms.

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS};

/// Points for clearing `lines` rows at once at `level`
///
/// Counts outside 1..=4 score nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for `level` in milliseconds
pub fn fall_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(reduction).max(MIN_FALL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_points_table() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn line_points_scale_with_level() {
        assert_eq!(line_clear_points(1, 3), 300);
        assert_eq!(line_clear_points(4, 5), 4000);
    }

    #[test]
    fn level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn fall_interval_curve() {
        assert_eq!(fall_interval_ms(1), 1000);
        assert_eq!(fall_interval_ms(2), 950);
        assert_eq!(fall_interval_ms(10), 550);
        assert_eq!(fall_interval_ms(19), 100);
        assert_eq!(fall_interval_ms(20), 50);
        assert_eq!(fall_interval_ms(21), 50);
        assert_eq!(fall_interval_ms(1000), 50);
    }

    #[test]
    fn fall_interval_is_non_increasing() {
        let mut prev = fall_interval_ms(1);
        for level in 2..40 {
            let cur = fall_interval_ms(level);
            assert!(cur <= prev);
            prev = cur;
        }
    }
}
