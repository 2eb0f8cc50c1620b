use crate::Vector2D;

#[cfg(feature = "std")]
use crate::Bounds;
#[cfg(feature = "std")]
use rand::Rng;

/// A single boid entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self { position, velocity }
    }

    /// Uniform position inside `bounds` inset by `margin`, heading in a
    /// random direction at `speed`.
    #[cfg(feature = "std")]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, speed: f32, margin: f32) -> Self {
        let position = Vector2D::new(
            sample_axis(rng, bounds.width, margin),
            sample_axis(rng, bounds.height, margin),
        );
        let angle = rng.gen_range(0.0..core::f32::consts::TAU);
        Self::new(position, Vector2D::from_angle(angle, speed))
    }
}

/// Falls back to the whole axis when the margin leaves no room, and to 0 for
/// an empty axis.
#[cfg(feature = "std")]
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: f32, margin: f32) -> f32 {
    let (low, high) = if extent - margin > margin {
        (margin, extent - margin)
    } else {
        (0.0, extent)
    };

    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_boid_creation() {
        let boid = Boid::new(Vector2D::new(10.0, 20.0), Vector2D::new(1.0, 1.0));

        assert_eq!(boid.position, Vector2D::new(10.0, 20.0));
        assert_eq!(boid.velocity, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn test_random_respects_margin() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(800.0, 600.0);

        for _ in 0..500 {
            let boid = Boid::random(&mut rng, bounds, 10.0, 100.0);
            assert!(boid.position.x >= 100.0 && boid.position.x < 700.0);
            assert!(boid.position.y >= 100.0 && boid.position.y < 500.0);
            assert!((boid.velocity.magnitude() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_random_ignores_margin_wider_than_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(100.0, 100.0);

        for _ in 0..100 {
            let boid = Boid::random(&mut rng, bounds, 1.0, 80.0);
            assert!(boid.position.x >= 0.0 && boid.position.x < 100.0);
        }
    }

    #[test]
    fn test_random_on_empty_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let boid = Boid::random(&mut rng, Bounds::new(0.0, 0.0), 1.0, 0.0);
        assert_eq!(boid.position, Vector2D::zero());
    }
}
