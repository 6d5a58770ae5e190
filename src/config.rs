//! Game tuning
//!
//! Every gameplay constant lives in [`GameConfig`] so a run can be reshaped
//! from a JSON file without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub player_speed: f32,
    pub player_start_health: i32,
    pub fire_cooldown_ticks: u32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,

    // === Hostiles ===
    pub hostile_min_size: u32,
    pub hostile_max_size: u32,
    pub hostile_min_speed: f32,
    pub hostile_max_speed: f32,
    pub hostile_spawn_ceiling: f32,
    pub hostile_point_base: u32,

    // === Spawning ===
    pub spawn_base_interval: u32,
    pub spawn_level_step: u32,
    pub spawn_max_reduction: u32,
    pub spawn_min_interval: u32,

    // === Starfield ===
    pub particle_count: usize,
    pub particle_min_size: f32,
    pub particle_max_size: f32,
    pub particle_min_speed: f32,
    pub particle_max_speed: f32,

    // === Impact effects ===
    pub effect_start_radius: f32,
    pub effect_max_radius: f32,
    pub effect_growth_step: f32,

    // === Combat & progression ===
    pub contact_damage: i32,
    pub score_per_level: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_speed: PLAYER_SPEED,
            player_start_health: PLAYER_START_HEALTH,
            fire_cooldown_ticks: FIRE_COOLDOWN_TICKS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,

            hostile_min_size: HOSTILE_MIN_SIZE,
            hostile_max_size: HOSTILE_MAX_SIZE,
            hostile_min_speed: HOSTILE_MIN_SPEED,
            hostile_max_speed: HOSTILE_MAX_SPEED,
            hostile_spawn_ceiling: HOSTILE_SPAWN_CEILING,
            hostile_point_base: HOSTILE_POINT_BASE,

            spawn_base_interval: SPAWN_BASE_INTERVAL,
            spawn_level_step: SPAWN_LEVEL_STEP,
            spawn_max_reduction: SPAWN_MAX_REDUCTION,
            spawn_min_interval: SPAWN_MIN_INTERVAL,

            particle_count: PARTICLE_COUNT,
            particle_min_size: PARTICLE_MIN_SIZE,
            particle_max_size: PARTICLE_MAX_SIZE,
            particle_min_speed: PARTICLE_MIN_SPEED,
            particle_max_speed: PARTICLE_MAX_SPEED,

            effect_start_radius: EFFECT_START_RADIUS,
            effect_max_radius: EFFECT_MAX_RADIUS,
            effect_growth_step: EFFECT_GROWTH_STEP,

            contact_damage: CONTACT_DAMAGE,
            score_per_level: SCORE_PER_LEVEL,
        }
    }
}

/// Order a pair so `lo <= hi`, warning when it had to be swapped
fn ordered<T: PartialOrd + Copy + std::fmt::Debug>(name: &str, lo: T, hi: T) -> (T, T) {
    if lo > hi {
        log::warn!("{name}: range {lo:?}..{hi:?} is inverted, swapping");
        (hi, lo)
    } else {
        (lo, hi)
    }
}

/// Replace a non-positive or non-finite value with its default
fn positive(name: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{name}: {value} is not a positive number, using {fallback}");
        fallback
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Repair values the simulation cannot honour
    ///
    /// After this, hostile sizes stay below the point base (so every kill is
    /// worth at least one point), every hostile fits horizontally inside the
    /// field, the player fits inside the lower half, and spawn intervals are
    /// at least one tick.
    pub fn sanitized(mut self) -> Self {
        self.field_width = positive("field_width", self.field_width, FIELD_WIDTH);
        self.field_height = positive("field_height", self.field_height, FIELD_HEIGHT);

        self.player_width = positive("player_width", self.player_width, PLAYER_WIDTH)
            .min(self.field_width);
        self.player_height = positive("player_height", self.player_height, PLAYER_HEIGHT)
            .min(self.field_height / 2.0);
        self.player_bottom_margin = self
            .player_bottom_margin
            .clamp(0.0, self.field_height / 2.0 - self.player_height);
        self.player_speed = self.player_speed.max(0.0);
        if self.player_start_health <= 0 {
            log::warn!(
                "player_start_health: {} would end the run immediately, using {}",
                self.player_start_health,
                PLAYER_START_HEALTH
            );
            self.player_start_health = PLAYER_START_HEALTH;
        }

        self.projectile_speed = self.projectile_speed.max(0.0);
        self.projectile_radius = positive("projectile_radius", self.projectile_radius, PROJECTILE_RADIUS);

        let (min_size, max_size) =
            ordered("hostile_size", self.hostile_min_size, self.hostile_max_size);
        let size_cap = self
            .hostile_point_base
            .saturating_sub(1)
            .min((self.field_width / 2.0) as u32)
            .max(1);
        if max_size > size_cap {
            log::warn!("hostile_max_size: {max_size} exceeds {size_cap}, clamping");
        }
        self.hostile_max_size = max_size.clamp(1, size_cap);
        self.hostile_min_size = min_size.clamp(1, self.hostile_max_size);
        if self.hostile_point_base <= self.hostile_max_size {
            self.hostile_point_base = self.hostile_max_size + 1;
        }

        let (min_speed, max_speed) =
            ordered("hostile_speed", self.hostile_min_speed, self.hostile_max_speed);
        self.hostile_min_speed = min_speed.max(0.0);
        self.hostile_max_speed = max_speed.max(self.hostile_min_speed);
        // The whole body must start above the visible field
        let largest = self.hostile_max_size as f32;
        if self.hostile_spawn_ceiling.is_nan() || self.hostile_spawn_ceiling < largest {
            log::warn!(
                "hostile_spawn_ceiling: {} is below the largest hostile ({largest}), raising",
                self.hostile_spawn_ceiling
            );
            self.hostile_spawn_ceiling = largest;
        }

        self.spawn_min_interval = self.spawn_min_interval.max(1);
        self.spawn_base_interval = self.spawn_base_interval.max(self.spawn_min_interval);

        let (min_size, max_size) =
            ordered("particle_size", self.particle_min_size, self.particle_max_size);
        self.particle_min_size = min_size.max(0.0);
        self.particle_max_size = max_size.max(self.particle_min_size);
        let (min_speed, max_speed) =
            ordered("particle_speed", self.particle_min_speed, self.particle_max_speed);
        self.particle_min_speed = min_speed.max(0.0);
        self.particle_max_speed = max_speed.max(self.particle_min_speed);

        self.effect_growth_step =
            positive("effect_growth_step", self.effect_growth_step, EFFECT_GROWTH_STEP);
        self.effect_start_radius =
            positive("effect_start_radius", self.effect_start_radius, EFFECT_START_RADIUS);
        self.effect_max_radius = self.effect_max_radius.max(self.effect_start_radius);

        if self.contact_damage < 0 {
            log::warn!("contact_damage: {} would heal the player, using 0", self.contact_damage);
            self.contact_damage = 0;
        }
        self.score_per_level = self.score_per_level.max(1);

        self
    }

    /// Vertical midpoint; the player may not rise above it
    #[inline]
    pub fn field_midline(&self) -> f32 {
        self.field_height / 2.0
    }
}
