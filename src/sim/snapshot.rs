//! Read-only view of a session handed to the renderer each tick

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::Tint;
use super::state::{GameEvent, GamePhase, Session};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub radius: f32,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostileView {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub field: Vec2,
    pub phase: GamePhase,
    pub score: u64,
    pub best_score: u64,
    pub level: u32,
    pub player: PlayerView,
    pub projectiles: Vec<ProjectileView>,
    pub hostiles: Vec<HostileView>,
    pub particles: Vec<ParticleView>,
    pub effects: Vec<EffectView>,
    pub events: Vec<GameEvent>,
}

impl RenderSnapshot {
    pub fn capture(session: &Session) -> Self {
        let player = &session.player;
        Self {
            field: Vec2::new(session.config.field_width, session.config.field_height),
            phase: session.phase,
            score: session.score,
            best_score: session.best_score,
            level: session.level(),
            player: PlayerView {
                pos: player.pos,
                size: Vec2::new(player.width, player.height),
                health: player.health,
                tint: player.tint,
            },
            projectiles: session
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pos: p.pos,
                    radius: p.radius,
                    tint: p.tint,
                })
                .collect(),
            hostiles: session
                .hostiles
                .iter()
                .map(|h| HostileView {
                    pos: h.pos,
                    size: h.side(),
                    tint: h.tint,
                })
                .collect(),
            particles: session
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    size: p.size,
                })
                .collect(),
            effects: session
                .effects
                .iter()
                .map(|e| EffectView {
                    pos: e.pos,
                    radius: e.radius,
                })
                .collect(),
            events: session.events().to_vec(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
