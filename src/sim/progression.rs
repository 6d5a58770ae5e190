//! Score-to-level tracking

use serde::{Deserialize, Serialize};

/// Level the score would map to if every threshold were applied at once
pub fn steady_state_level(score: u64, score_per_level: u64) -> u32 {
    let per_level = score_per_level.max(1);
    u32::try_from(score / per_level)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// Current level, advanced at most one step per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    level: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self { level: 1 }
    }
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn reset(&mut self) {
        self.level = 1;
    }

    /// Once-per-tick check; returns the new level on a level-up
    ///
    /// A score that clears several thresholds in one tick still gains only one
    /// level; the rest follow on later ticks.
    pub fn update(&mut self, score: u64, score_per_level: u64) -> Option<u32> {
        if score < u64::from(self.level).saturating_mul(score_per_level) {
            return None;
        }
        self.level = self.level.saturating_add(1);
        Some(self.level)
    }
}
