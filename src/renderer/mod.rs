//! Rendering boundary
//!
//! The simulation never draws. Each frame its [`RenderSnapshot`] is turned
//! into a flat list of [`DrawCommand`]s that any backend can replay.
//!
//! [`RenderSnapshot`]: crate::sim::RenderSnapshot

pub mod scene;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use scene::{build_scene, colors, tint_color};

/// RGBA, each channel in 0..=1
pub type Rgba = [f32; 4];

/// Horizontal anchoring for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One abstract draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: Rgba,
    },
    RectOutline {
        min: Vec2,
        size: Vec2,
        thickness: f32,
        color: Rgba,
    },
    Triangle {
        points: [Vec2; 3],
        color: Rgba,
    },
    /// `anchor.y` is the top of the text line
    Text {
        text: String,
        anchor: Vec2,
        align: TextAlign,
        color: Rgba,
    },
}

/// A backend that consumes draw commands in order
pub trait Renderer {
    fn submit(&mut self, command: &DrawCommand);

    fn submit_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.submit(command);
        }
    }
}

/// Headless renderer that only counts what it was asked to draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawStats {
    pub frames: u64,
    pub clears: u64,
    pub circles: u64,
    pub rects: u64,
    pub triangles: u64,
    pub texts: u64,
}

impl DrawStats {
    pub fn total(&self) -> u64 {
        self.clears + self.circles + self.rects + self.triangles + self.texts
    }
}

impl Renderer for DrawStats {
    fn submit(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { .. } => {
                self.frames += 1;
                self.clears += 1;
            }
            DrawCommand::Circle { .. } => self.circles += 1,
            DrawCommand::Rect { .. } | DrawCommand::RectOutline { .. } => self.rects += 1,
            DrawCommand::Triangle { .. } => self.triangles += 1,
            DrawCommand::Text { .. } => self.texts += 1,
        }
    }
}
