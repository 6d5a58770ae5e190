//! Star Sentinel - a vertical arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, progression, session)
//! - `renderer`: Abstract draw-command scene built from render snapshots
//! - `platform`: Frame pacing and input source abstractions
//! - `config`: Data-driven game tuning
//! - `autopilot`: Scripted input source for headless runs

pub mod autopilot;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TARGET_TICK_RATE: u32 = 60;

    /// Play field dimensions (screen space, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player craft defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Gap between the craft and the bottom edge at spawn
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HEALTH: i32 = 100;
    /// Ticks between shots
    pub const FIRE_COOLDOWN_TICKS: u32 = 15;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 7.0;
    pub const PROJECTILE_RADIUS: f32 = 4.0;

    /// Hostile defaults (sizes are inclusive)
    pub const HOSTILE_MIN_SIZE: u32 = 20;
    pub const HOSTILE_MAX_SIZE: u32 = 40;
    pub const HOSTILE_MIN_SPEED: f32 = 1.0;
    pub const HOSTILE_MAX_SPEED: f32 = 3.0;
    /// Highest spawn point above the field (hostiles start in [-ceiling, -size])
    pub const HOSTILE_SPAWN_CEILING: f32 = 100.0;
    /// Point value is `HOSTILE_POINT_BASE - size`
    pub const HOSTILE_POINT_BASE: u32 = 50;

    /// Spawn cadence: `max(MIN, BASE - min(MAX_REDUCTION, level * STEP))`
    pub const SPAWN_BASE_INTERVAL: u32 = 60;
    pub const SPAWN_LEVEL_STEP: u32 = 5;
    pub const SPAWN_MAX_REDUCTION: u32 = 50;
    pub const SPAWN_MIN_INTERVAL: u32 = 10;

    /// Background starfield
    pub const PARTICLE_COUNT: usize = 100;
    pub const PARTICLE_MIN_SIZE: f32 = 0.1;
    pub const PARTICLE_MAX_SIZE: f32 = 2.0;
    pub const PARTICLE_MIN_SPEED: f32 = 0.2;
    pub const PARTICLE_MAX_SPEED: f32 = 1.0;

    /// Impact effect animation
    pub const EFFECT_START_RADIUS: f32 = 5.0;
    pub const EFFECT_MAX_RADIUS: f32 = 30.0;
    pub const EFFECT_GROWTH_STEP: f32 = 1.0;

    /// Health lost per hostile contact
    pub const CONTACT_DAMAGE: i32 = 10;
    /// Score needed per level
    pub const SCORE_PER_LEVEL: u64 = 1000;
}
