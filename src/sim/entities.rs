//! Entity types and their per-tick update rules
//!
//! Randomness always comes through an injected `Rng`, so construction is
//! deterministic under a seeded generator.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, circles_overlap};
use super::tick::TickInput;
use crate::config::GameConfig;

/// Cosmetic color tag carried by entities (the renderer owns the actual RGBA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Blue,
    Green,
    Red,
    Purple,
    Yellow,
}

/// Colors a hostile may be spawned with
pub const HOSTILE_TINTS: [Tint; 3] = [Tint::Red, Tint::Purple, Tint::Yellow];

/// Uniform sample in `[lo, hi]`, collapsing to `lo` for empty ranges
fn sample_f32(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

fn sample_u32(rng: &mut impl Rng, lo: u32, hi: u32) -> u32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Ticks until the next shot is allowed (fires only at zero)
    pub fire_cooldown: u32,
    pub health: i32,
    pub tint: Tint,
}

impl Player {
    /// Spawn centered horizontally, near the bottom edge
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                (config.field_width / 2.0 - config.player_width / 2.0).floor(),
                config.field_height - config.player_height - config.player_bottom_margin,
            ),
            width: config.player_width,
            height: config.player_height,
            speed: config.player_speed,
            fire_cooldown: 0,
            health: config.player_start_health,
            tint: Tint::Blue,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply directional input, clamped to the lower half of the field
    pub fn steer(&mut self, input: &TickInput, config: &GameConfig) {
        let mut delta = Vec2::ZERO;
        if input.left {
            delta.x -= self.speed;
        }
        if input.right {
            delta.x += self.speed;
        }
        if input.up {
            delta.y -= self.speed;
        }
        if input.down {
            delta.y += self.speed;
        }

        let min = Vec2::new(0.0, config.field_midline());
        let max = Vec2::new(
            (config.field_width - self.width).max(0.0),
            (config.field_height - self.height).max(min.y),
        );
        self.pos = (self.pos + delta).clamp(min, max);
    }

    pub fn tick_cooldown(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    /// Fire from the nose of the craft if the cooldown has elapsed
    pub fn try_fire(&mut self, config: &GameConfig) -> Option<Projectile> {
        if self.fire_cooldown != 0 {
            return None;
        }
        self.fire_cooldown = config.fire_cooldown_ticks;
        Some(Projectile::new(
            Vec2::new((self.pos.x + self.width / 2.0).floor(), self.pos.y),
            config,
        ))
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// A player shot travelling straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub tint: Tint,
}

impl Projectile {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            radius: config.projectile_radius,
            speed: config.projectile_speed,
            tint: Tint::Green,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Left through the top edge
    pub fn is_expired(&self) -> bool {
        self.pos.y < 0.0
    }
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    /// Top-left corner of the square body
    pub pos: Vec2,
    /// Side length; also drives the point value
    pub size: u32,
    pub speed: f32,
    pub tint: Tint,
    /// Smaller hostiles are worth more
    pub points: u32,
}

impl Hostile {
    /// Spawn above the visible field with randomized size, lane, speed and tint
    pub fn spawn(rng: &mut impl Rng, config: &GameConfig) -> Self {
        let size = sample_u32(rng, config.hostile_min_size, config.hostile_max_size);
        let side = size as f32;
        let x = sample_f32(rng, side, config.field_width - side).floor();
        let y = sample_f32(rng, -config.hostile_spawn_ceiling, -side).floor();
        let speed = sample_f32(rng, config.hostile_min_speed, config.hostile_max_speed);
        let tint = HOSTILE_TINTS[rng.random_range(0..HOSTILE_TINTS.len())];
        Self::new(Vec2::new(x, y), size, speed, tint, config)
    }

    pub fn new(pos: Vec2, size: u32, speed: f32, tint: Tint, config: &GameConfig) -> Self {
        Self {
            pos,
            size,
            speed,
            tint,
            points: config.hostile_point_base.saturating_sub(size),
        }
    }

    #[inline]
    pub fn side(&self) -> f32 {
        self.size as f32
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.side(), self.side())
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// Fully past the bottom edge
    pub fn is_expired(&self, config: &GameConfig) -> bool {
        self.pos.y > config.field_height
    }

    /// Circle test against a round entity such as a projectile
    pub fn overlaps_point_entity(&self, center: Vec2, radius: f32) -> bool {
        circles_overlap(self.center(), self.side() / 2.0, center, radius)
    }

    /// Box test against the player's craft
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        self.bounds().overlaps(rect)
    }
}

/// A background star; wraps to the top instead of dying
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundParticle {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl BackgroundParticle {
    pub fn spawn(rng: &mut impl Rng, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                sample_f32(rng, 0.0, config.field_width).floor(),
                sample_f32(rng, 0.0, config.field_height).floor(),
            ),
            size: sample_f32(rng, config.particle_min_size, config.particle_max_size),
            speed: sample_f32(rng, config.particle_min_speed, config.particle_max_speed),
        }
    }

    pub fn advance(&mut self, rng: &mut impl Rng, config: &GameConfig) {
        self.pos.y += self.speed;
        if self.pos.y > config.field_height {
            self.pos.y = 0.0;
            self.pos.x = sample_f32(rng, 0.0, config.field_width).floor();
        }
    }
}

/// Expanding then collapsing burst left behind by a destroyed hostile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactEffect {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub step: f32,
    pub growing: bool,
}

impl ImpactEffect {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            radius: config.effect_start_radius,
            max_radius: config.effect_max_radius,
            step: config.effect_growth_step,
            growing: true,
        }
    }

    /// Step the animation; returns whether the effect is still alive
    pub fn advance_and_check(&mut self) -> bool {
        if self.growing {
            self.radius += self.step;
            if self.radius >= self.max_radius {
                self.growing = false;
            }
        } else {
            self.radius -= self.step;
        }
        self.radius > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_player_spawn_position() {
        let player = Player::new(&config());
        assert_eq!(player.pos, Vec2::new(380.0, 530.0));
        assert_eq!(player.health, 100);
        assert_eq!(player.fire_cooldown, 0);
    }

    #[test]
    fn test_player_clamped_to_left_edge() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        player.pos.x = 2.0;
        player.steer(&TickInput { left: true, ..Default::default() }, &cfg);
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_player_cannot_rise_above_midline() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        let up = TickInput { up: true, ..Default::default() };
        for _ in 0..200 {
            player.steer(&up, &cfg);
        }
        assert_eq!(player.pos.y, cfg.field_midline());
    }

    #[test]
    fn test_player_clamped_to_bottom_and_right() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        let input = TickInput { right: true, down: true, ..Default::default() };
        for _ in 0..200 {
            player.steer(&input, &cfg);
        }
        assert_eq!(player.pos.x, cfg.field_width - player.width);
        assert_eq!(player.pos.y, cfg.field_height - player.height);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        let start = player.pos;
        player.steer(&TickInput { left: true, right: true, ..Default::default() }, &cfg);
        assert_eq!(player.pos, start);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let cfg = config();
        let mut player = Player::new(&cfg);

        let shot = player.try_fire(&cfg).expect("first shot is free");
        assert_eq!(shot.pos, Vec2::new(400.0, 530.0));
        assert_eq!(player.fire_cooldown, cfg.fire_cooldown_ticks);
        assert!(player.try_fire(&cfg).is_none());

        for _ in 0..cfg.fire_cooldown_ticks - 1 {
            player.tick_cooldown();
            assert!(player.try_fire(&cfg).is_none());
        }
        player.tick_cooldown();
        assert!(player.try_fire(&cfg).is_some());
    }

    #[test]
    fn test_cooldown_does_not_underflow() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        player.tick_cooldown();
        assert_eq!(player.fire_cooldown, 0);
    }

    #[test]
    fn test_projectile_expires_above_top() {
        let cfg = config();
        let mut shot = Projectile::new(Vec2::new(100.0, 10.0), &cfg);
        shot.advance();
        assert_eq!(shot.pos.y, 3.0);
        assert!(!shot.is_expired());
        shot.advance();
        assert!(shot.is_expired());
    }

    #[test]
    fn test_hostile_point_entity_overlap() {
        let cfg = config();
        let hostile = Hostile::new(Vec2::new(100.0, 100.0), 20, 1.0, Tint::Red, &cfg);
        // Center (110, 110); reach is 10 + 4
        assert!(hostile.overlaps_point_entity(Vec2::new(110.0, 123.9), 4.0));
        assert!(!hostile.overlaps_point_entity(Vec2::new(110.0, 124.0), 4.0));
    }

    #[test]
    fn test_hostile_rect_overlap() {
        let cfg = config();
        let hostile = Hostile::new(Vec2::new(100.0, 100.0), 20, 1.0, Tint::Red, &cfg);
        assert!(hostile.overlaps_rect(&Rect::new(115.0, 115.0, 40.0, 50.0)));
        assert!(!hostile.overlaps_rect(&Rect::new(120.0, 100.0, 40.0, 50.0)));
    }

    #[test]
    fn test_hostile_expires_past_bottom() {
        let cfg = config();
        let mut hostile = Hostile::new(Vec2::new(100.0, 599.0), 20, 1.0, Tint::Red, &cfg);
        assert!(!hostile.is_expired(&cfg));
        hostile.advance();
        assert!(!hostile.is_expired(&cfg));
        hostile.advance();
        assert!(hostile.is_expired(&cfg));
    }

    #[test]
    fn test_particle_wraps_with_new_lane() {
        let cfg = config();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut star = BackgroundParticle {
            pos: Vec2::new(123.5, cfg.field_height - 0.1),
            size: 1.0,
            speed: 0.5,
        };
        star.advance(&mut rng, &cfg);
        assert_eq!(star.pos.y, 0.0);
        assert!(star.pos.x >= 0.0 && star.pos.x <= cfg.field_width);
        assert_eq!(star.pos.x, star.pos.x.floor());
    }

    #[test]
    fn test_effect_lifecycle() {
        let cfg = config();
        let mut effect = ImpactEffect::new(Vec2::ZERO, &cfg);
        let mut ticks = 0;
        let mut peak = effect.radius;
        while effect.advance_and_check() {
            peak = peak.max(effect.radius);
            ticks += 1;
            assert!(ticks < 1000, "effect never finished");
        }
        assert_eq!(peak, cfg.effect_max_radius);
        assert!(effect.radius <= 0.0);
        // 25 steps up to the peak, 29 alive steps back down, then the final step to zero
        assert_eq!(ticks, 25 + 29);
    }

    proptest! {
        #[test]
        fn prop_hostile_spawn_within_bounds(seed in any::<u64>()) {
            let cfg = config();
            let mut rng = Pcg32::seed_from_u64(seed);
            let hostile = Hostile::spawn(&mut rng, &cfg);

            prop_assert!(hostile.size >= cfg.hostile_min_size);
            prop_assert!(hostile.size <= cfg.hostile_max_size);
            prop_assert_eq!(hostile.points, cfg.hostile_point_base - hostile.size);
            prop_assert!(hostile.points > 0);
            prop_assert!(hostile.pos.x >= 0.0);
            prop_assert!(hostile.pos.x + hostile.side() <= cfg.field_width);
            prop_assert!(hostile.pos.y < 0.0);
            prop_assert!(hostile.speed >= cfg.hostile_min_speed);
            prop_assert!(hostile.speed <= cfg.hostile_max_speed);
            prop_assert!(HOSTILE_TINTS.contains(&hostile.tint));
        }

        #[test]
        fn prop_particles_never_leave_field(seed in any::<u64>(), steps in 0usize..2000) {
            let cfg = config();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut star = BackgroundParticle::spawn(&mut rng, &cfg);
            for _ in 0..steps {
                star.advance(&mut rng, &cfg);
            }
            prop_assert!(star.pos.y >= 0.0 && star.pos.y <= cfg.field_height);
            prop_assert!(star.pos.x >= 0.0 && star.pos.x <= cfg.field_width);
        }
    }
}
