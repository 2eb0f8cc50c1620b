use boid_core::{behavior, Boid, BoidConfig, Bounds, Flock, Vector2D};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn bounds() -> Bounds {
    Bounds::new(WIDTH, HEIGHT)
}

fn single(x: f32, y: f32, vx: f32, vy: f32, config: BoidConfig) -> Flock {
    let boid = Boid::new(Vector2D::new(x, y), Vector2D::new(vx, vy));
    Flock::from_boids(vec![boid], config, bounds())
}

#[test]
fn cardinality_is_fixed_across_ticks() {
    let mut flock = Flock::seeded(50, bounds(), 10.0, 0.0, BoidConfig::default(), 1);

    for _ in 0..200 {
        flock.update();
        assert_eq!(flock.len(), 50);
    }
}

#[test]
fn isolated_boid_only_turns_at_borders() {
    let config = BoidConfig::default();
    let boids = vec![
        Boid::new(Vector2D::new(400.0, 300.0), Vector2D::new(1.5, -0.5)),
        Boid::new(Vector2D::new(50.0, 300.0), Vector2D::new(0.0, 0.0)),
        Boid::new(Vector2D::new(750.0, 50.0), Vector2D::new(0.0, 0.0)),
    ];
    // More than visual_range apart from each other.
    let mut flock = Flock::from_boids(boids, config, bounds());

    flock.update();
    let agents = flock.agents();

    assert_eq!(agents[0].velocity, Vector2D::new(1.5, -0.5));
    assert_eq!(agents[1].velocity, Vector2D::new(0.2, 0.0));
    assert_eq!(agents[2].velocity, Vector2D::new(-0.2, 0.2));
}

#[test]
fn displacement_follows_per_axis_min() {
    let config = BoidConfig::default();
    let cases = [
        (-25.0, 7.0),
        (3.0, -3.0),
        (4.0, 4.0),
        (100.0, -100.0),
        (0.0, 0.0),
    ];

    for (vx, vy) in cases {
        let mut flock = single(400.0, 300.0, vx, vy, config);
        let before = flock.agents()[0].position;

        flock.update();
        let after = flock.agents()[0].position;

        assert_eq!(after.x - before.x, f32::min(vx, config.max_speed));
        assert_eq!(after.y - before.y, f32::min(vy, config.max_speed));
    }
}

#[test]
fn border_turning_applies_only_inside_margin() {
    let config = BoidConfig::default();

    let mut inside_zone = single(config.border_margin - 1.0, 300.0, 0.0, 0.0, config);
    for tick in 1..=3 {
        inside_zone.update();
        let vx = inside_zone.agents()[0].velocity.x;
        assert!((vx - config.turn_factor * tick as f32).abs() < 1e-6);
    }

    let mut past_zone = single(config.border_margin + 1.0, 300.0, 0.0, 0.0, config);
    past_zone.update();
    assert_eq!(past_zone.agents()[0].velocity, Vector2D::zero());
}

#[test]
fn update_is_deterministic() {
    let flock = Flock::seeded(50, bounds(), 10.0, 0.0, BoidConfig::default(), 99);
    let mut a = flock.clone();
    let mut b = flock;

    for _ in 0..10 {
        a.update();
        b.update();
    }

    assert_eq!(a.agents(), b.agents());
}

#[test]
fn step_on_identical_input_is_bit_identical() {
    let flock = Flock::seeded(30, bounds(), 10.0, 0.0, BoidConfig::default(), 5);
    let previous = flock.agents().to_vec();
    let mut first = previous.clone();
    let mut second = previous.clone();

    behavior::step(&previous, &mut first, flock.config(), bounds());
    behavior::step(&previous, &mut second, flock.config(), bounds());

    for (x, y) in first.iter().zip(second.iter()) {
        assert_eq!(x.position.x.to_bits(), y.position.x.to_bits());
        assert_eq!(x.position.y.to_bits(), y.position.y.to_bits());
        assert_eq!(x.velocity.x.to_bits(), y.velocity.x.to_bits());
        assert_eq!(x.velocity.y.to_bits(), y.velocity.y.to_bits());
    }
}

#[test]
fn close_pair_moves_apart() {
    let config = BoidConfig {
        protected_range: 70.0,
        matching_factor: 0.0,
        centering_factor: 0.0,
        ..BoidConfig::default()
    };
    let boids = vec![
        Boid::new(Vector2D::new(400.0, 300.0), Vector2D::zero()),
        Boid::new(Vector2D::new(410.0, 300.0), Vector2D::zero()),
    ];
    let mut flock = Flock::from_boids(boids, config, bounds());
    let before = flock.agents()[0].position.distance(&flock.agents()[1].position);

    flock.update();
    let agents = flock.agents();
    let after = agents[0].position.distance(&agents[1].position);

    assert!(agents[0].velocity.x < 0.0);
    assert!(agents[1].velocity.x > 0.0);
    assert!(after > before, "distance {after} did not grow from {before}");
}

#[test]
fn lone_boid_has_no_neighbor_division() {
    let config = BoidConfig::default();
    let mut flock = single(20.0, 580.0, 0.0, 0.0, config);

    flock.update();
    let boid = flock.agents()[0];

    assert!(boid.position.is_finite());
    assert!(boid.velocity.is_finite());
    assert_eq!(boid.velocity, Vector2D::new(0.2, -0.2));
}

#[test]
fn default_flock_stays_finite_for_1000_ticks() {
    let mut flock = Flock::seeded(50, bounds(), 10.0, 0.0, BoidConfig::default(), 2024);

    for tick in 0..1000 {
        flock.update();
        for boid in flock.agents() {
            assert!(
                boid.position.is_finite() && boid.velocity.is_finite(),
                "non-finite boid at tick {tick}: {boid:?}"
            );
        }
    }
}

#[test]
fn minimal_preset_runs_separation_only() {
    let config = BoidConfig::minimal();
    let boids = vec![
        Boid::new(Vector2D::new(300.0, 300.0), Vector2D::new(1.0, 0.0)),
        Boid::new(Vector2D::new(450.0, 300.0), Vector2D::new(-1.0, 0.0)),
    ];
    let mut flock = Flock::from_boids(boids, config, bounds());

    flock.update();
    let agents = flock.agents();

    // 150 apart: inside visual range, so the pair repels with no alignment
    // or cohesion pulling velocities together.
    assert_eq!(agents[0].velocity, Vector2D::new(-149.0, 0.0));
    assert_eq!(agents[1].velocity, Vector2D::new(149.0, 0.0));
}
