use alloc::vec::Vec;

use crate::{behavior, Boid, BoidConfig, Bounds};

#[cfg(feature = "std")]
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Speed of freshly spawned boids
pub const INITIAL_SPEED: f32 = 10.0;

/// A fixed-size flock with a double-buffered update
///
/// Agents are only exposed as slices, so the count chosen at construction
/// holds for the whole run.
#[derive(Debug, Clone)]
pub struct Flock {
    boids: Vec<Boid>,
    scratch: Vec<Boid>,
    config: BoidConfig,
    bounds: Bounds,
}

impl Flock {
    pub fn from_boids(boids: Vec<Boid>, config: BoidConfig, bounds: Bounds) -> Self {
        let scratch = boids.clone();
        Self {
            boids,
            scratch,
            config,
            bounds,
        }
    }

    #[cfg(feature = "std")]
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        bounds: Bounds,
        initial_speed: f32,
        margin: f32,
        config: BoidConfig,
        rng: &mut R,
    ) -> Self {
        let boids = (0..count)
            .map(|_| Boid::random(rng, bounds, initial_speed, margin))
            .collect();
        Self::from_boids(boids, config, bounds)
    }

    #[cfg(feature = "std")]
    pub fn random(count: usize, bounds: Bounds, config: BoidConfig) -> Self {
        Self::initialize(
            count,
            bounds,
            INITIAL_SPEED,
            0.0,
            config,
            &mut rand::thread_rng(),
        )
    }

    #[cfg(feature = "std")]
    pub fn seeded(
        count: usize,
        bounds: Bounds,
        initial_speed: f32,
        margin: f32,
        config: BoidConfig,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::initialize(count, bounds, initial_speed, margin, config, &mut rng)
    }

    pub fn agents(&self) -> &[Boid] {
        &self.boids
    }

    pub fn agents_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn config(&self) -> &BoidConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BoidConfig {
        &mut self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Advances every boid by one tick.
    pub fn update(&mut self) {
        behavior::step(&self.boids, &mut self.scratch, &self.config, self.bounds);
        core::mem::swap(&mut self.boids, &mut self.scratch);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::Vector2D;

    #[test]
    fn test_flock_creation() {
        let flock = Flock::random(50, Bounds::new(800.0, 600.0), BoidConfig::default());
        assert_eq!(flock.len(), 50);
        assert_eq!(flock.bounds(), Bounds::new(800.0, 600.0));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let bounds = Bounds::new(800.0, 600.0);
        let a = Flock::seeded(20, bounds, 10.0, 50.0, BoidConfig::default(), 42);
        let b = Flock::seeded(20, bounds, 10.0, 50.0, BoidConfig::default(), 42);
        let c = Flock::seeded(20, bounds, 10.0, 50.0, BoidConfig::default(), 43);

        assert_eq!(a.agents(), b.agents());
        assert_ne!(a.agents(), c.agents());
    }

    #[test]
    fn test_flock_update_moves_boids() {
        let mut flock = Flock::random(10, Bounds::new(800.0, 600.0), BoidConfig::default());
        let initial: Vec<_> = flock.agents().iter().map(|b| b.position).collect();

        flock.update();

        let changed = flock
            .agents()
            .iter()
            .zip(initial.iter())
            .any(|(b, &before)| b.position != before);
        assert!(changed);
    }

    #[test]
    fn test_resize_keeps_agents() {
        let mut flock = Flock::random(5, Bounds::new(800.0, 600.0), BoidConfig::default());
        let before = flock.agents().to_vec();

        flock.resize(1024.0, 768.0);

        assert_eq!(flock.bounds(), Bounds::new(1024.0, 768.0));
        assert_eq!(flock.agents(), &before[..]);
    }

    #[test]
    fn test_update_sees_host_edits() {
        let boids = vec![Boid::new(Vector2D::new(400.0, 300.0), Vector2D::zero())];
        let mut flock = Flock::from_boids(boids, BoidConfig::default(), Bounds::new(800.0, 600.0));

        flock.agents_mut()[0].velocity = Vector2D::new(1.0, 2.0);
        flock.update();

        assert_eq!(flock.agents()[0].position, Vector2D::new(401.0, 302.0));
    }
}
