use anyhow::{anyhow, bail, Context, Result};
use boid_core::Flock;
use boid_shared::{FlockSnapshot, SimulationSettings};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::time::{self, MissedTickBehavior};

use crate::render::Renderer;

/// A flock plus its tick counter
#[derive(Debug, Clone)]
pub struct Simulation {
    flock: Flock,
    tick: u64,
}

impl Simulation {
    pub fn new(flock: Flock) -> Self {
        Self { flock, tick: 0 }
    }

    /// Validates `settings` and spawns a fresh flock, seeded when
    /// `settings.seed` is set.
    pub fn from_settings(settings: &SimulationSettings) -> Result<Self> {
        settings.validate().context("Invalid simulation settings")?;

        let config = settings.to_boid_config();
        let bounds = settings.bounds();
        let flock = match settings.seed {
            Some(seed) => Flock::seeded(
                settings.agent_count,
                bounds,
                settings.initial_speed,
                settings.spawn_margin,
                config,
                seed,
            ),
            None => Flock::initialize(
                settings.agent_count,
                bounds,
                settings.initial_speed,
                settings.spawn_margin,
                config,
                &mut rand::thread_rng(),
            ),
        };

        Ok(Self::new(flock))
    }

    pub fn tick(&mut self) {
        self.flock.update();
        self.tick += 1;
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.flock.resize(width, height);
    }

    pub fn snapshot(&self) -> FlockSnapshot {
        FlockSnapshot::capture(self.tick, &self.flock)
    }
}

/// Periods of the two loops in realtime mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    update_period: Duration,
    render_period: Duration,
}

impl Clock {
    /// Fails unless both rates give a finite, non-zero timer period.
    pub fn new(update_hz: f32, render_hz: f32) -> Result<Self> {
        Ok(Self {
            update_period: period("update", update_hz)?,
            render_period: period("render", render_hz)?,
        })
    }

    pub fn update_period(&self) -> Duration {
        self.update_period
    }

    pub fn render_period(&self) -> Duration {
        self.render_period
    }
}

fn period(name: &str, hz: f32) -> Result<Duration> {
    let period = Duration::try_from_secs_f64(1.0 / f64::from(hz))
        .map_err(|_| anyhow!("{name} rate must be a positive number, got {hz}"))?;
    if period.is_zero() {
        bail!("{name} rate of {hz} Hz is too high for the timer");
    }
    Ok(period)
}

/// Runs `ticks` ticks back to back, rendering every `every`-th tick and the
/// last one.
pub fn run_headless<R: Renderer + ?Sized>(
    sim: &mut Simulation,
    ticks: u64,
    every: u64,
    renderer: &mut R,
) -> Result<()> {
    let every = every.max(1);
    for index in 1..=ticks {
        sim.tick();
        if index % every == 0 || index == ticks {
            renderer.render(&sim.snapshot())?;
        }
    }
    Ok(())
}

/// Runs physics at `clock.update_hz` in its own task and renders the newest
/// snapshot at `clock.render_hz` until `ticks` is reached or Ctrl-C.
///
/// The physics task owns the flock; the render loop only receives snapshots.
pub async fn run_realtime<R: Renderer + ?Sized>(
    sim: Simulation,
    clock: Clock,
    ticks: Option<u64>,
    renderer: &mut R,
) -> Result<Simulation> {
    let (frames_tx, mut frames_rx) = watch::channel(sim.snapshot());
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    let update_period = clock.update_period();

    let physics = tokio::spawn(async move {
        let mut sim = sim;
        let mut interval = time::interval(update_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick of an interval completes immediately.
        interval.tick().await;

        loop {
            if ticks.is_some_and(|limit| sim.tick_count() >= limit) {
                break;
            }
            tokio::select! {
                _ = interval.tick() => {
                    sim.tick();
                    frames_tx.send_replace(sim.snapshot());
                }
                _ = &mut stop_rx => break,
            }
        }
        sim
    });

    let mut frame_interval = time::interval(clock.render_period());
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);
    let mut last_rendered = None;

    let outcome: Result<()> = loop {
        tokio::select! {
            _ = frame_interval.tick() => {
                match frames_rx.has_changed() {
                    Ok(true) => {
                        let frame = frames_rx.borrow_and_update().clone();
                        if let Err(err) = renderer.render(&frame) {
                            break Err(err);
                        }
                        last_rendered = Some(frame.tick);
                    }
                    Ok(false) => {}
                    // Physics finished and dropped its sender.
                    Err(_) => break Ok(()),
                }
            }
            _ = &mut interrupt => {
                log::info!("Interrupt received, stopping simulation");
                break Ok(());
            }
        }
    };

    // Ignored when physics already stopped on its own.
    let _ = stop_tx.send(());
    let sim = physics.await.context("Physics task failed")?;
    outcome?;

    if last_rendered != Some(sim.tick_count()) {
        renderer.render(&sim.snapshot())?;
    }

    Ok(sim)
}
