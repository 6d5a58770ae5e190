//! Session state and lifecycle
//!
//! Everything one run of the game owns lives in [`Session`]; nothing is
//! global. The RNG is seeded explicitly so a run replays exactly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{BackgroundParticle, Hostile, ImpactEffect, Player, Projectile};
use super::progression::Progression;
use super::registry::Registry;
use super::snapshot::RenderSnapshot;
use super::spawner::Spawner;
use super::tick::{TickInput, tick};
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Player health reached zero; waiting for a reset
    GameOver,
}

/// Things that happened during a tick, for HUD or sound hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile destroyed a hostile centered at (x, y)
    HostileDestroyed { points: u32, x: f32, y: f32 },
    /// A hostile rammed the player
    PlayerHit { damage: i32, health: i32 },
    LevelUp { level: u32 },
    GameOver { score: u64 },
    Reset,
}

/// Per-run counters (cleared on reset)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Ticks simulated while playing
    pub ticks: u64,
    pub kills: u32,
    pub contacts: u32,
    /// Health lost to contacts
    pub damage_taken: i32,
    pub shots_fired: u32,
}

/// One game session: the player, every entity registry, and the scoreboard
#[derive(Debug, Clone)]
pub struct Session {
    /// Sanitized tuning for this session
    pub config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub projectiles: Registry<Projectile>,
    pub hostiles: Registry<Hostile>,
    /// Fixed population, created once and never reset
    pub particles: Registry<BackgroundParticle>,
    pub effects: Registry<ImpactEffect>,
    pub score: u64,
    pub progression: Progression,
    pub spawner: Spawner,
    pub stats: SessionStats,
    /// Best final score across resets of this session (in memory only)
    pub best_score: u64,
    pub(super) rng: Pcg32,
    /// Events recorded during the most recent tick
    pub(super) events: Vec<GameEvent>,
}

impl Session {
    /// Create a session with the given tuning and RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, seed, Pcg32::seed_from_u64(seed))
    }

    /// Create a session around an already-constructed generator
    pub fn with_rng(config: GameConfig, seed: u64, mut rng: Pcg32) -> Self {
        let config = config.sanitized();
        let particles = (0..config.particle_count)
            .map(|_| BackgroundParticle::spawn(&mut rng, &config))
            .collect();

        log::info!(
            "Session started (seed {}, field {}x{})",
            seed,
            config.field_width,
            config.field_height
        );

        Self {
            player: Player::new(&config),
            config,
            seed,
            phase: GamePhase::Playing,
            projectiles: Registry::new(),
            hostiles: Registry::new(),
            particles,
            effects: Registry::new(),
            score: 0,
            progression: Progression::new(),
            spawner: Spawner::new(),
            stats: SessionStats::default(),
            best_score: 0,
            rng,
            events: Vec::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Events recorded during the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Advance one tick and return what the renderer should draw
    pub fn tick(&mut self, input: &TickInput) -> RenderSnapshot {
        tick(self, input);
        self.snapshot()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }

    /// Start a fresh run: new player, empty registries, score and level back
    /// to their initial values. The starfield keeps scrolling.
    pub fn reset(&mut self) {
        self.best_score = self.best_score.max(self.score);
        log::info!(
            "Session reset (final score {}, level {}, best {})",
            self.score,
            self.level(),
            self.best_score
        );

        self.player = Player::new(&self.config);
        self.projectiles.clear();
        self.hostiles.clear();
        self.effects.clear();
        self.score = 0;
        self.progression.reset();
        self.spawner.reset();
        self.stats = SessionStats::default();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Reset);
    }
}
