/// How `max_speed` limits movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedClamp {
    /// Each axis of the displacement is capped from above by `max_speed`:
    /// `dx = min(vx, max_speed)`, `dy = min(vy, max_speed)`. Negative
    /// components are never capped and the velocity itself is left as is.
    #[default]
    PerAxis,
    /// Velocity is limited to `max_speed` by magnitude before moving.
    Magnitude,
}

/// Static tuning of the flocking rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidConfig {
    pub protected_range: f32,
    pub visual_range: f32,
    pub avoid_factor: f32,
    pub matching_factor: f32,
    pub centering_factor: f32,
    pub max_speed: f32,
    pub speed_clamp: SpeedClamp,
    pub border_margin: f32,
    pub turn_factor: f32,
}

impl BoidConfig {
    /// Separation only, no border turning.
    pub fn minimal() -> Self {
        Self {
            protected_range: 70.0,
            visual_range: 200.0,
            avoid_factor: 1.0,
            matching_factor: 0.0,
            centering_factor: 0.0,
            max_speed: 4.0,
            speed_clamp: SpeedClamp::PerAxis,
            border_margin: 0.0,
            turn_factor: 0.0,
        }
    }
}

impl Default for BoidConfig {
    fn default() -> Self {
        Self {
            protected_range: 70.0,
            visual_range: 200.0,
            avoid_factor: 0.05,
            matching_factor: 0.05,
            centering_factor: 0.0005,
            max_speed: 4.0,
            speed_clamp: SpeedClamp::PerAxis,
            border_margin: 100.0,
            turn_factor: 0.2,
        }
    }
}

/// Viewport extent used for spawning and border turning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_disables_alignment_and_cohesion() {
        let config = BoidConfig::minimal();
        assert_eq!(config.matching_factor, 0.0);
        assert_eq!(config.centering_factor, 0.0);
        assert_eq!(config.turn_factor, 0.0);
        assert_eq!(config.avoid_factor, 1.0);
    }

    #[test]
    fn test_default_clamp_is_per_axis() {
        assert_eq!(BoidConfig::default().speed_clamp, SpeedClamp::PerAxis);
    }
}
