//! Collision detection and combat resolution
//!
//! Two phases, in order: projectile kills, then body contact with the player.
//! A hostile removed by a projectile is never tested against the player in the
//! same tick, so one hostile can never both score and deal damage.

use super::entities::{Hostile, ImpactEffect, Player, Projectile};
use super::registry::Registry;
use super::state::GameEvent;
use crate::config::GameConfig;

/// Outcome of one combat pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatReport {
    pub score_gained: u64,
    /// Hostiles destroyed by projectiles
    pub kills: u32,
    /// Hostiles that rammed the player
    pub contacts: u32,
    pub damage_taken: i32,
    pub events: Vec<GameEvent>,
}

/// First projectile (in firing order) that hits the hostile, skipping spent ones
fn first_hit(hostile: &Hostile, projectiles: &Registry<Projectile>) -> Option<usize> {
    projectiles
        .live()
        .find(|(_, shot)| hostile.overlaps_point_entity(shot.pos, shot.radius))
        .map(|(index, _)| index)
}

/// Resolve every projectile/hostile and hostile/player overlap for this tick
///
/// Removed entities are compacted out before returning; new impact effects are
/// appended to `effects`.
pub fn resolve(
    player: &mut Player,
    projectiles: &mut Registry<Projectile>,
    hostiles: &mut Registry<Hostile>,
    effects: &mut Registry<ImpactEffect>,
    config: &GameConfig,
) -> CombatReport {
    let mut report = CombatReport::default();

    // Phase 1: projectiles vs hostiles, at most one hit per hostile
    for index in 0..hostiles.len() {
        let hostile = &hostiles[index];
        let Some(shot) = first_hit(hostile, projectiles) else {
            continue;
        };
        let (center, points) = (hostile.center(), hostile.points);

        projectiles.mark(shot);
        hostiles.mark(index);
        effects.push(ImpactEffect::new(center, config));

        report.score_gained += u64::from(points);
        report.kills += 1;
        report.events.push(GameEvent::HostileDestroyed {
            points,
            x: center.x,
            y: center.y,
        });
        log::debug!("Hostile destroyed at ({:.0}, {:.0}) for {} points", center.x, center.y, points);
    }

    // Phase 2: surviving hostiles vs the player's box
    let player_box = player.bounds();
    for index in 0..hostiles.len() {
        if hostiles.is_marked(index) || !hostiles[index].overlaps_rect(&player_box) {
            continue;
        }
        let center = hostiles[index].center();

        hostiles.mark(index);
        effects.push(ImpactEffect::new(center, config));
        player.take_damage(config.contact_damage);

        report.contacts += 1;
        report.damage_taken += config.contact_damage;
        report.events.push(GameEvent::PlayerHit {
            damage: config.contact_damage,
            health: player.health,
        });
        log::debug!("Player hit for {}, health now {}", config.contact_damage, player.health);
    }

    projectiles.compact();
    hostiles.compact();

    report
}
