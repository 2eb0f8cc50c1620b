use alloc::vec::Vec;

use boid_core::{Boid, Bounds, Flock};
use serde::{Deserialize, Serialize};

/// Represents a 2D position in screen coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

/// Canvas dimensions a frame was produced for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl From<Bounds> for Viewport {
    fn from(bounds: Bounds) -> Self {
        Self {
            width: bounds.width,
            height: bounds.height,
        }
    }
}

/// Position and velocity of one boid as seen by a renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgentSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl AgentSnapshot {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn speed(&self) -> f32 {
        libm::sqrtf(self.vx * self.vx + self.vy * self.vy)
    }
}

impl From<&Boid> for AgentSnapshot {
    fn from(boid: &Boid) -> Self {
        Self {
            x: boid.position.x,
            y: boid.position.y,
            vx: boid.velocity.x,
            vy: boid.velocity.y,
        }
    }
}

/// Owned copy of the flock handed to renderers between ticks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlockSnapshot {
    pub tick: u64,
    pub viewport: Viewport,
    pub agents: Vec<AgentSnapshot>,
}

impl FlockSnapshot {
    pub fn capture(tick: u64, flock: &Flock) -> Self {
        Self {
            tick,
            viewport: flock.bounds().into(),
            agents: flock.agents().iter().map(AgentSnapshot::from).collect(),
        }
    }

    /// Mean position of the flock, `None` when empty.
    pub fn centroid(&self) -> Option<Position> {
        if self.agents.is_empty() {
            return None;
        }
        let n = self.agents.len() as f32;
        let (sx, sy) = self
            .agents
            .iter()
            .fold((0.0, 0.0), |(sx, sy), a| (sx + a.x, sy + a.y));
        Some(Position::new(sx / n, sy / n))
    }

    pub fn mean_speed(&self) -> Option<f32> {
        if self.agents.is_empty() {
            return None;
        }
        let total: f32 = self.agents.iter().map(AgentSnapshot::speed).sum();
        Some(total / self.agents.len() as f32)
    }
}
