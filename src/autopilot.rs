//! Simple bot that plays the game through the normal input boundary
//!
//! Strategy: slide under the lowest hostile still above the ship, stay at the
//! bottom, and keep the trigger held. After a game over it presses restart
//! until its restart budget is spent.

use crate::platform::InputSource;
use crate::sim::{HostileView, RenderSnapshot, TickInput};

/// Horizontal slack before the bot bothers to move
const DEADZONE: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    restarts_left: u32,
}

impl Autopilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            restarts_left: restarts,
        }
    }

    pub fn restarts_left(&self) -> u32 {
        self.restarts_left
    }

    /// Lowest hostile whose body is still above the ship's nose
    fn pick_target<'a>(snapshot: &'a RenderSnapshot) -> Option<&'a HostileView> {
        let nose_y = snapshot.player.pos.y;
        snapshot
            .hostiles
            .iter()
            .filter(|h| h.pos.y + h.size < nose_y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }
}

impl InputSource for Autopilot {
    fn next_input(&mut self, last: &RenderSnapshot) -> TickInput {
        if last.is_game_over() {
            if self.restarts_left == 0 {
                return TickInput::default();
            }
            self.restarts_left -= 1;
            log::info!("Autopilot restarting ({} restarts left)", self.restarts_left);
            return TickInput {
                reset: true,
                ..Default::default()
            };
        }

        let mut input = TickInput {
            fire: true,
            down: true,
            ..Default::default()
        };
        if let Some(target) = Self::pick_target(last) {
            let ship_x = last.player.pos.x + last.player.size.x / 2.0;
            let target_x = target.pos.x + target.size / 2.0;
            let dx = target_x - ship_x;
            input.left = dx < -DEADZONE;
            input.right = dx > DEADZONE;
        }
        input
    }
}
