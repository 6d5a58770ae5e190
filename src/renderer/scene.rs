//! Scene construction: snapshot in, draw commands out (painter's order)

use glam::Vec2;

use super::{DrawCommand, Rgba, TextAlign};
use crate::sim::{GamePhase, RenderSnapshot, Tint};

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const RED: Rgba = [1.0, 0.2, 0.2, 1.0];
    pub const GREEN: Rgba = [0.2, 1.0, 0.4, 1.0];
    pub const BLUE: Rgba = [0.2, 0.6, 1.0, 1.0];
    pub const YELLOW: Rgba = [1.0, 1.0, 0.2, 1.0];
    pub const PURPLE: Rgba = [0.7, 0.27, 1.0, 1.0];
    pub const HUD_BAR: Rgba = [0.12, 0.12, 0.2, 1.0];
    pub const OVERLAY: Rgba = [0.0, 0.0, 0.0, 0.7];
}

/// HUD strip height along the top edge
const HUD_HEIGHT: f32 = 40.0;
const HUD_PADDING: f32 = 10.0;
/// Engine glow below the ship
const GLOW_HALF_WIDTH: f32 = 5.0;
const GLOW_LENGTH: f32 = 15.0;
/// Inner core inset for shots and impact effects
const SHOT_CORE_INSET: f32 = 2.0;
const EFFECT_CORE_INSET: f32 = 5.0;
const HOSTILE_OUTLINE: f32 = 2.0;

pub fn tint_color(tint: Tint) -> Rgba {
    match tint {
        Tint::Blue => colors::BLUE,
        Tint::Green => colors::GREEN,
        Tint::Red => colors::RED,
        Tint::Purple => colors::PURPLE,
        Tint::Yellow => colors::YELLOW,
    }
}

fn text(text: String, anchor: Vec2, align: TextAlign, color: Rgba) -> DrawCommand {
    DrawCommand::Text {
        text,
        anchor,
        align,
        color,
    }
}

/// Build the full draw list for one frame
pub fn build_scene(snapshot: &RenderSnapshot) -> Vec<DrawCommand> {
    let field = snapshot.field;
    let mut commands = Vec::with_capacity(
        8 + snapshot.particles.len()
            + 2 * (snapshot.projectiles.len() + snapshot.hostiles.len() + snapshot.effects.len()),
    );

    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });

    for star in &snapshot.particles {
        commands.push(DrawCommand::Circle {
            center: star.pos,
            radius: star.size,
            color: colors::WHITE,
        });
    }

    // Ship: nose at top-center, engine glow under the tail
    let p = &snapshot.player;
    let nose = Vec2::new(p.pos.x + p.size.x / 2.0, p.pos.y);
    let tail_y = p.pos.y + p.size.y;
    commands.push(DrawCommand::Triangle {
        points: [
            nose,
            Vec2::new(p.pos.x, tail_y),
            Vec2::new(p.pos.x + p.size.x, tail_y),
        ],
        color: tint_color(p.tint),
    });
    commands.push(DrawCommand::Triangle {
        points: [
            Vec2::new(nose.x - GLOW_HALF_WIDTH, tail_y),
            Vec2::new(nose.x, tail_y + GLOW_LENGTH),
            Vec2::new(nose.x + GLOW_HALF_WIDTH, tail_y),
        ],
        color: colors::YELLOW,
    });

    for shot in &snapshot.projectiles {
        commands.push(DrawCommand::Circle {
            center: shot.pos,
            radius: shot.radius,
            color: tint_color(shot.tint),
        });
        if shot.radius > SHOT_CORE_INSET {
            commands.push(DrawCommand::Circle {
                center: shot.pos,
                radius: shot.radius - SHOT_CORE_INSET,
                color: colors::WHITE,
            });
        }
    }

    for hostile in &snapshot.hostiles {
        let size = Vec2::splat(hostile.size);
        commands.push(DrawCommand::Rect {
            min: hostile.pos,
            size,
            color: tint_color(hostile.tint),
        });
        commands.push(DrawCommand::RectOutline {
            min: hostile.pos,
            size,
            thickness: HOSTILE_OUTLINE,
            color: colors::WHITE,
        });
    }

    for effect in &snapshot.effects {
        commands.push(DrawCommand::Circle {
            center: effect.pos,
            radius: effect.radius,
            color: colors::YELLOW,
        });
        if effect.radius > EFFECT_CORE_INSET {
            commands.push(DrawCommand::Circle {
                center: effect.pos,
                radius: effect.radius - EFFECT_CORE_INSET,
                color: colors::RED,
            });
        }
    }

    // HUD
    commands.push(DrawCommand::Rect {
        min: Vec2::ZERO,
        size: Vec2::new(field.x, HUD_HEIGHT),
        color: colors::HUD_BAR,
    });
    commands.push(text(
        format!("Score: {}", snapshot.score),
        Vec2::new(HUD_PADDING, HUD_PADDING),
        TextAlign::Left,
        colors::GREEN,
    ));
    commands.push(text(
        format!("Level: {}", snapshot.level),
        Vec2::new(field.x / 2.0, HUD_PADDING),
        TextAlign::Center,
        colors::YELLOW,
    ));
    commands.push(text(
        format!("Health: {}", snapshot.player.health),
        Vec2::new(field.x - HUD_PADDING, HUD_PADDING),
        TextAlign::Right,
        colors::RED,
    ));

    match snapshot.phase {
        GamePhase::GameOver => {
            commands.push(DrawCommand::Rect {
                min: Vec2::ZERO,
                size: field,
                color: colors::OVERLAY,
            });
            commands.push(text(
                "GAME OVER".to_string(),
                Vec2::new(field.x / 2.0, field.y / 2.0 - 50.0),
                TextAlign::Center,
                colors::RED,
            ));
            commands.push(text(
                "Press R to Restart".to_string(),
                Vec2::new(field.x / 2.0, field.y / 2.0 + 20.0),
                TextAlign::Center,
                colors::WHITE,
            ));
        }
        GamePhase::Playing => {
            commands.push(text(
                "Controls: Arrow Keys to Move, SPACE to Shoot".to_string(),
                Vec2::new(field.x / 2.0, field.y - HUD_HEIGHT),
                TextAlign::Center,
                colors::WHITE,
            ));
        }
    }

    commands
}
