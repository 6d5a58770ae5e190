//! Per-frame simulation tick
//!
//! One tick is one atomic pass: input, player, spawning, entity advance,
//! combat, progression, terminal check.

use serde::{Deserialize, Serialize};

use super::combat;
use super::state::{GameEvent, GamePhase, Session};

/// Key state for a single tick (already decoded from whatever input device)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire pressed this tick
    pub fire: bool,
    /// Restart pressed this tick (only honoured after game over)
    pub reset: bool,
}

/// Advance the session by one tick
pub fn tick(session: &mut Session, input: &TickInput) {
    session.events.clear();

    // Game over suspends the simulation; only a reset gets us out
    if session.phase == GamePhase::GameOver {
        if !input.reset {
            return;
        }
        session.reset();
    }

    session.stats.ticks += 1;
    let config = &session.config;

    // Player
    if input.fire {
        if let Some(shot) = session.player.try_fire(config) {
            session.projectiles.push(shot);
            session.stats.shots_fired += 1;
        }
    }
    session.player.steer(input, config);
    session.player.tick_cooldown();

    // Spawning
    if let Some(hostile) = session
        .spawner
        .tick(session.progression.level(), &mut session.rng, config)
    {
        log::trace!("Spawned hostile (size {}) at x={}", hostile.size, hostile.pos.x);
        session.hostiles.push(hostile);
    }

    // Movement
    session.projectiles.retain_mut(|shot| {
        shot.advance();
        !shot.is_expired()
    });
    session.hostiles.retain_mut(|hostile| {
        hostile.advance();
        !hostile.is_expired(config)
    });
    for star in session.particles.iter_mut() {
        star.advance(&mut session.rng, config);
    }
    session.effects.retain_mut(|effect| effect.advance_and_check());

    // Combat
    let report = combat::resolve(
        &mut session.player,
        &mut session.projectiles,
        &mut session.hostiles,
        &mut session.effects,
        config,
    );
    session.score += report.score_gained;
    session.stats.kills += report.kills;
    session.stats.contacts += report.contacts;
    session.stats.damage_taken += report.damage_taken;
    session.events.extend(report.events);

    // Progression
    if let Some(level) = session.progression.update(session.score, config.score_per_level) {
        log::info!("Level up: {} (score {})", level, session.score);
        session.events.push(GameEvent::LevelUp { level });
    }

    // Terminal check
    if !session.player.is_alive() {
        session.phase = GamePhase::GameOver;
        session.best_score = session.best_score.max(session.score);
        session.events.push(GameEvent::GameOver {
            score: session.score,
        });
        log::info!(
            "Game over: score {}, level {}, {} kills in {} ticks",
            session.score,
            session.progression.level(),
            session.stats.kills,
            session.stats.ticks
        );
    }
}
