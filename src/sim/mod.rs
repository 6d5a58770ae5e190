//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (insertion order per registry)
//! - No rendering or platform dependencies

pub mod combat;
pub mod entities;
pub mod geometry;
pub mod progression;
pub mod registry;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use combat::{CombatReport, resolve};
pub use entities::{BackgroundParticle, Hostile, ImpactEffect, Player, Projectile, Tint};
pub use geometry::{Rect, circles_overlap, distance};
pub use progression::{Progression, steady_state_level};
pub use registry::Registry;
pub use snapshot::{EffectView, HostileView, ParticleView, PlayerView, ProjectileView, RenderSnapshot};
pub use spawner::{Spawner, spawn_interval};
pub use state::{GameEvent, GamePhase, Session, SessionStats};
pub use tick::{TickInput, tick};
