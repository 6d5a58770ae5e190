//! Platform abstraction layer
//!
//! The simulation only sees a [`TickInput`] per tick and never sleeps. What
//! produces that input, and how ticks are spaced in wall-clock time, is up to
//! the implementations here.

use std::time::{Duration, Instant};

use crate::sim::{RenderSnapshot, TickInput};

/// Produces the key state for the next tick
pub trait InputSource {
    /// `last` is the frame the player is currently looking at
    fn next_input(&mut self, last: &RenderSnapshot) -> TickInput;
}

/// Replays a fixed list of inputs, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<TickInput>) -> Self {
        Self { inputs, cursor: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.inputs.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self, _last: &RenderSnapshot) -> TickInput {
        let input = self.inputs.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        input
    }
}

/// "Tick at target rate" service
pub trait FramePacer {
    /// Block until the next tick is due
    fn wait_for_next_tick(&mut self);
}

/// Runs ticks back to back (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl FramePacer for Unpaced {
    fn wait_for_next_tick(&mut self) {}
}

/// Sleeps so ticks land on a fixed period
///
/// If a tick overruns, the schedule is re-anchored to now rather than
/// bursting to catch up.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    period: Duration,
    next_deadline: Option<Instant>,
}

impl FixedRatePacer {
    pub fn new(ticks_per_second: u32) -> Self {
        let rate = ticks_per_second.max(1);
        Self {
            period: Duration::from_secs(1) / rate,
            next_deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FramePacer for FixedRatePacer {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + self.period);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.period);
        } else {
            log::trace!("Tick overran by {:?}", now - deadline);
            self.next_deadline = Some(now + self.period);
        }
    }
}
