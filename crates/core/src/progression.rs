//! Progression tracker - cumulative score, derived level, level-up edge detector

use serde::{Deserialize, Serialize};

use crate::scoring::level_for_score;

/// Score and level owned by one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    score: u32,
    level: u32,
    /// Highest level already reported by [`Progression::level_up`].
    announced_level: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            announced_level: 1,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Add points and recompute the level from the thresholds
    pub fn update(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.level = level_for_score(self.score);
    }

    /// Edge-triggered: true once for every level gained since the last call that returned true.
    ///
    /// A jump of two levels at once is reported over two calls.
    pub fn level_up(&mut self) -> bool {
        if self.level > self.announced_level {
            self.announced_level += 1;
            true
        } else {
            false
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
