//! Scoring module - classic placement and row-clear rules
//!
//! Compatibility note:
//! The row-clear rule reproduces the classic exercise exactly, including its
//! quirk: with `mult = 2 * rows`, the formula `10 * mult * level * mult` is
//! applied whenever `mult > 0`, so the flat `1000 * level` branch for
//! `mult >= 8` can never be taken.

use crate::types::{
    LEVEL_THRESHOLDS, LINE_SCORE_BASE, MULTI_CLEAR_BONUS_PER_LEVEL, PLACEMENT_BONUS_PER_LEVEL,
};

/// Points for landing any piece at `level`
pub fn placement_points(level: u32) -> u32 {
    PLACEMENT_BONUS_PER_LEVEL * level
}

/// Multiplier for a landing that completed `rows` rows
pub fn clear_multiplier(rows: usize) -> u32 {
    2 * rows as u32
}

/// Points for completing `rows` rows in one landing at `level`
pub fn line_clear_points(rows: usize, level: u32) -> u32 {
    let mult = clear_multiplier(rows);
    if mult > 0 {
        LINE_SCORE_BASE
            .saturating_mul(mult)
            .saturating_mul(level)
            .saturating_mul(mult)
    } else if mult >= 8 {
        MULTI_CLEAR_BONUS_PER_LEVEL * level
    } else {
        0
    }
}

/// Level for a cumulative score
///
/// | Score | Level |
/// |-------|-------|
/// | < 1000 | 1 |
/// | < 2000 | 2 |
/// | < 4000 | 3 |
/// | < 8000 | 4 |
/// | < 16000 | 5 |
/// | otherwise | 6 |
pub fn level_for_score(score: u32) -> u32 {
    1 + LEVEL_THRESHOLDS
        .iter()
        .take_while(|&&threshold| score >= threshold)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_points() {
        assert_eq!(placement_points(1), 5);
        assert_eq!(placement_points(4), 20);
    }

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 40);
        assert_eq!(line_clear_points(2, 1), 160);
        assert_eq!(line_clear_points(3, 2), 720);
    }

    #[test]
    fn test_multi_clear_bonus_branch_is_never_taken() {
        // Four rows give mult = 8, yet the squared formula wins.
        assert_eq!(clear_multiplier(4), 8);
        assert_eq!(line_clear_points(4, 1), 640);
        assert_ne!(line_clear_points(4, 1), MULTI_CLEAR_BONUS_PER_LEVEL);
        assert_eq!(line_clear_points(4, 3), 1920);
    }

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(1000), 2);
        assert_eq!(level_for_score(1999), 2);
        assert_eq!(level_for_score(2000), 3);
        assert_eq!(level_for_score(4000), 4);
        assert_eq!(level_for_score(8000), 5);
        assert_eq!(level_for_score(15999), 5);
        assert_eq!(level_for_score(16000), 6);
        assert_eq!(level_for_score(u32::MAX), 6);
    }
}
