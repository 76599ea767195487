use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use orrery::sim::diagnostics;
use orrery::sim::units::{meters_to_au, DT_SCALE_DEFAULT, DT_SCALE_MAX, DT_SCALE_MIN};
use orrery::{InitialState, RandomSystemParameters, ScenarioConfig, StellarSystem, TRAIL_LENGTH};

/// Runs a stellar system headless and reports where the bodies end up.
#[derive(Parser, Debug)]
#[command(name = "orrery", version)]
struct Args {
    /// YAML scenario to load instead of the built-in inner solar system.
    #[arg(short, long, conflicts_with = "random")]
    scenario: Option<PathBuf>,

    /// Generate a star with this many randomly placed bodies.
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 2000)]
    frames: usize,

    /// Simulated days per frame.
    #[arg(short, long, default_value_t = DT_SCALE_DEFAULT)]
    dt_scale: f64,

    /// Print a status line every this many frames (0 disables).
    #[arg(long, default_value_t = 250)]
    report_every: usize,
}

fn build_system(args: &Args) -> Result<StellarSystem> {
    if let Some(path) = &args.scenario {
        let scenario = ScenarioConfig::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?;
        let trail_length = scenario.trail_length.unwrap_or(TRAIL_LENGTH);
        return Ok(StellarSystem::with_trail_length(
            scenario.into_initial_state(),
            trail_length,
        )?);
    }
    let initial = match args.random {
        Some(body_count) => RandomSystemParameters {
            body_count,
            seed: args.seed,
            ..Default::default()
        }
        .generate()?,
        None => InitialState::default(),
    };
    Ok(StellarSystem::new(initial)?)
}

fn report(system: &StellarSystem) {
    let days = system.elapsed_time() / orrery::SECONDS_PER_DAY;
    println!("frame {} (day {:.1})", system.steps_taken(), days);
    for (name, position) in system.names().iter().zip(system.positions()) {
        println!(
            "  {:<10} x = {:>8.3} AU  y = {:>8.3} AU  z = {:>8.3} AU",
            name,
            meters_to_au(position.x),
            meters_to_au(position.y),
            meters_to_au(position.z)
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dt_scale = args.dt_scale.clamp(DT_SCALE_MIN, DT_SCALE_MAX);
    if dt_scale != args.dt_scale {
        warn!(
            "Speed scale {} outside [{}, {}], using {}",
            args.dt_scale, DT_SCALE_MIN, DT_SCALE_MAX, dt_scale
        );
    }

    let mut system = build_system(&args)?;
    info!(
        "Simulating {} bodies for {} frames at {} days per frame",
        system.body_count(),
        args.frames,
        dt_scale
    );
    let initial_energy = diagnostics::total_energy(system.bodies())?;
    let initial_center = diagnostics::center_of_mass(system.bodies());

    for frame in 1..=args.frames {
        system
            .step(dt_scale)
            .with_context(|| format!("frame {} failed", frame))?;
        if args.report_every > 0 && frame % args.report_every == 0 {
            report(&system);
        }
    }

    let final_energy = diagnostics::total_energy(system.bodies())?;
    info!(
        "Relative energy drift after {} frames: {:e}",
        system.steps_taken(),
        ((final_energy - initial_energy) / initial_energy).abs()
    );
    let center_drift = diagnostics::center_of_mass(system.bodies()) - initial_center;
    info!(
        "Center of mass moved {:.6} AU",
        meters_to_au(center_drift.norm())
    );
    Ok(())
}
