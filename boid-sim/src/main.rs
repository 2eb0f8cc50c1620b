use anyhow::{Context, Result};
use boid_shared::render::{RenderStyle, Sprite};
use boid_shared::SimulationSettings;
use boid_sim::{run_headless, run_realtime, Clock, JsonLinesRenderer, Renderer, Simulation, SummaryRenderer};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// Separation, alignment, cohesion and border turning
    Classic,
    /// Separation only
    Minimal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpriteArg {
    Disk,
    Triangle,
}

impl From<SpriteArg> for Sprite {
    fn from(arg: SpriteArg) -> Self {
        match arg {
            SpriteArg::Disk => Sprite::Disk,
            SpriteArg::Triangle => Sprite::Triangle,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boid flocking simulation", long_about = None)]
struct Args {
    /// JSON settings file; replaces the preset, missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in settings used when no config file is given
    #[arg(short, long, value_enum, default_value = "classic")]
    preset: Preset,

    /// Number of boids
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for the initial placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks (required unless --realtime)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Run physics and rendering on wall-clock timers
    #[arg(short, long)]
    realtime: bool,

    /// Render loop rate in realtime mode
    #[arg(long, default_value_t = 60.0)]
    render_hz: f32,

    /// Write frames as JSON lines to this file ('-' for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// In headless mode, emit every n-th tick
    #[arg(short, long, default_value_t = 1)]
    every: u64,

    /// Write the final frame as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Shape used for the SVG frame
    #[arg(long, value_enum, default_value = "disk")]
    sprite: SpriteArg,

    /// Outline protected and visual ranges in the SVG frame
    #[arg(long)]
    debug_overlay: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn load_settings(args: &Args) -> Result<SimulationSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SimulationSettings::from_json(&json)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => match args.preset {
            Preset::Classic => SimulationSettings::default(),
            Preset::Minimal => SimulationSettings::minimal(),
        },
    };

    if let Some(count) = args.count {
        settings.agent_count = count;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    settings.validate().context("Invalid simulation settings")?;
    Ok(settings)
}

fn build_renderers(args: &Args) -> Result<Vec<Box<dyn Renderer>>> {
    let mut renderers: Vec<Box<dyn Renderer>> = vec![Box::new(SummaryRenderer)];

    match &args.output {
        Some(path) if path.as_os_str() == "-" => {
            renderers.push(Box::new(JsonLinesRenderer::new(std::io::stdout())));
        }
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?;
            log::info!("Writing frames to {}", path.display());
            renderers.push(Box::new(JsonLinesRenderer::new(BufWriter::new(file))));
        }
        None => {}
    }

    Ok(renderers)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let settings = load_settings(&args)?;
    log::info!("Boid simulation starting...");
    log::info!(
        "{} boids on {}x{}, physics at {} Hz",
        settings.agent_count,
        settings.width,
        settings.height,
        settings.update_hz
    );

    let mut sim = Simulation::from_settings(&settings).context("Failed to initialize simulation")?;
    let mut renderers = build_renderers(&args)?;

    if args.realtime {
        let clock = Clock::new(settings.update_hz, args.render_hz)
            .context("Invalid realtime rates")?;
        log::info!("Running in realtime mode, rendering at {} Hz", args.render_hz);
        sim = run_realtime(sim, clock, args.ticks, &mut renderers)
            .await
            .context("Simulation error")?;
    } else {
        let Some(ticks) = args.ticks else {
            anyhow::bail!("--ticks is required unless --realtime is set");
        };
        log::info!("Running {} ticks headless", ticks);
        run_headless(&mut sim, ticks, args.every, &mut renderers).context("Simulation error")?;
    }

    log::info!("Stopped after {} ticks", sim.tick_count());

    if let Some(path) = &args.svg {
        let style = RenderStyle {
            sprite: args.sprite.into(),
            debug_overlay: args.debug_overlay,
            ..RenderStyle::for_settings(&settings)
        };
        boid_sim::svg::write_svg(path, &sim.snapshot(), &style)?;
        log::info!("Final frame written to {}", path.display());
    }

    Ok(())
}
