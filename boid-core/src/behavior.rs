//! The per-tick flocking update.
//!
//! Every function here reads a snapshot of the previous tick and never the
//! buffer being written, so agents within one tick see consistent neighbors.

use crate::{Boid, BoidConfig, Bounds, SpeedClamp, Vector2D};

/// Aggregates of one boid's neighbors for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Neighborhood {
    /// Sum of `own.position - other.position` over every neighbor inside
    /// `visual_range`, protected or not.
    pub separation: Vector2D,
    pub velocity_sum: Vector2D,
    pub position_sum: Vector2D,
    /// Neighbors inside `visual_range` but outside `protected_range`.
    pub count: usize,
}

impl Neighborhood {
    pub fn average_velocity(&self) -> Option<Vector2D> {
        (self.count > 0).then(|| self.velocity_sum / self.count as f32)
    }

    pub fn average_position(&self) -> Option<Vector2D> {
        (self.count > 0).then(|| self.position_sum / self.count as f32)
    }
}

/// Collects the neighbor aggregates of `flock[index]`.
pub fn scan(index: usize, flock: &[Boid], config: &BoidConfig) -> Neighborhood {
    let boid = &flock[index];
    let mut neighborhood = Neighborhood::default();

    for (other_index, other) in flock.iter().enumerate() {
        // Self would only add `position - position`, a zero vector, to the
        // separation sum. Skipping it also keeps self out of `count` when
        // `protected_range` is zero.
        if other_index == index {
            continue;
        }

        let distance = boid.position.distance(&other.position);
        if distance < config.protected_range {
            neighborhood.separation += boid.position - other.position;
        } else if distance < config.visual_range {
            neighborhood.velocity_sum += other.velocity;
            neighborhood.position_sum += other.position;
            neighborhood.count += 1;
            neighborhood.separation += boid.position - other.position;
        }
    }

    neighborhood
}

/// Blends separation, alignment and cohesion into a new velocity.
pub fn steer(boid: &Boid, neighborhood: &Neighborhood, config: &BoidConfig) -> Vector2D {
    let mut velocity = boid.velocity;

    velocity += neighborhood.separation * config.avoid_factor;

    if let Some(average) = neighborhood.average_velocity() {
        velocity += (average - velocity) * config.matching_factor;
    }

    if let Some(center) = neighborhood.average_position() {
        velocity += (center - boid.position) * config.centering_factor;
    }

    velocity
}

/// Moves the boid by its velocity under the configured speed clamp.
pub fn advance(boid: &mut Boid, config: &BoidConfig) {
    match config.speed_clamp {
        SpeedClamp::PerAxis => {
            boid.position.x += boid.velocity.x.min(config.max_speed);
            boid.position.y += boid.velocity.y.min(config.max_speed);
        }
        SpeedClamp::Magnitude => {
            boid.velocity = boid.velocity.limit(config.max_speed);
            boid.position += boid.velocity;
        }
    }
}

/// Nudges the velocity back toward the interior when inside the border margin.
pub fn turn_at_borders(boid: &mut Boid, config: &BoidConfig, bounds: Bounds) {
    if boid.position.x < config.border_margin {
        boid.velocity.x += config.turn_factor;
    }
    if boid.position.x > bounds.width - config.border_margin {
        boid.velocity.x -= config.turn_factor;
    }
    if boid.position.y < config.border_margin {
        boid.velocity.y += config.turn_factor;
    }
    if boid.position.y > bounds.height - config.border_margin {
        boid.velocity.y -= config.turn_factor;
    }
}

/// Computes the next state of `previous[index]`.
pub fn next_state(index: usize, previous: &[Boid], config: &BoidConfig, bounds: Bounds) -> Boid {
    let neighborhood = scan(index, previous, config);
    let mut boid = previous[index];

    boid.velocity = steer(&boid, &neighborhood, config);
    advance(&mut boid, config);
    turn_at_borders(&mut boid, config, bounds);

    boid
}

/// Advances a whole flock by one tick, reading `previous` and writing `next`.
///
/// Both slices must have the same length.
pub fn step(previous: &[Boid], next: &mut [Boid], config: &BoidConfig, bounds: Bounds) {
    debug_assert_eq!(previous.len(), next.len());

    for (index, slot) in next.iter_mut().enumerate() {
        *slot = next_state(index, previous, config, bounds);
    }
}
