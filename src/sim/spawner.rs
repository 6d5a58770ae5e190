//! Time-gated hostile spawning

use rand::Rng;

use super::entities::Hostile;
use crate::config::GameConfig;

/// Ticks between spawns at a given level
///
/// `base - min(max_reduction, level * step)`, floored at the configured
/// minimum so the interval never reaches zero however far the level climbs.
pub fn spawn_interval(level: u32, config: &GameConfig) -> u32 {
    let reduction = level
        .saturating_mul(config.spawn_level_step)
        .min(config.spawn_max_reduction);
    config
        .spawn_base_interval
        .saturating_sub(reduction)
        .max(config.spawn_min_interval)
}

/// Spawn countdown owned by the session
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    timer: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks accumulated since the last spawn
    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }

    /// Advance one tick, emitting a hostile once the interval is reached
    pub fn tick(&mut self, level: u32, rng: &mut impl Rng, config: &GameConfig) -> Option<Hostile> {
        self.timer += 1;
        if self.timer < spawn_interval(level, config) {
            return None;
        }
        self.timer = 0;
        Some(Hostile::spawn(rng, config))
    }
}
