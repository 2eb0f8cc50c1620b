use core::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::{AgentSnapshot, Position, SimulationSettings};

pub const BACKGROUND_COLOR: &str = "#222";
pub const BOID_COLOR: &str = "#7FA";
pub const DEBUG_COLOR: &str = "rgba(255, 255, 255, 0.25)";

/// Shape drawn for each boid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sprite {
    #[default]
    Disk,
    Triangle,
}

/// Renderer-side drawing options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub sprite: Sprite,
    /// Disk radius, or circumradius of the triangle.
    pub boid_size: f32,
    /// Outline `protected_range` and `visual_range` around every boid.
    pub debug_overlay: bool,
    pub protected_range: f32,
    pub visual_range: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::for_settings(&SimulationSettings::default())
    }
}

impl RenderStyle {
    pub fn for_settings(settings: &SimulationSettings) -> Self {
        Self {
            sprite: Sprite::Disk,
            boid_size: 15.0,
            debug_overlay: false,
            protected_range: settings.protected_range,
            visual_range: settings.visual_range,
        }
    }
}

/// Heading of a velocity in radians.
pub fn heading(vx: f32, vy: f32) -> f32 {
    libm::atan2f(vy, vx)
}

/// Corners of an equilateral triangle centered on `center` with its first
/// vertex pointing along `(vx, vy)`.
pub fn triangle_vertices(center: Position, vx: f32, vy: f32, size: f32) -> [Position; 3] {
    let heading = heading(vx, vy);
    core::array::from_fn(|k| {
        let angle = heading + k as f32 * TAU / 3.0;
        Position::new(
            center.x + size * libm::cosf(angle),
            center.y + size * libm::sinf(angle),
        )
    })
}

pub fn agent_triangle(agent: &AgentSnapshot, size: f32) -> [Position; 3] {
    triangle_vertices(agent.position(), agent.vx, agent.vy, size)
}
