//! Delta-V headless driver
//!
//! Runs the simulation without a screen: a fixed tick length, optional
//! autopilot, progress in the log and the final state as JSON on stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use deltav::sim::{Autopilot, GameEvent};
use deltav::{World, WorldConfig};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON world config; missing fields use the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the RNG seed from the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Milliseconds per tick
    #[arg(short, long, default_value_t = 10)]
    delta_ms: u32,

    /// Let the autopilot keep the ship out of the black hole
    #[arg(short, long)]
    autopilot: bool,
}

fn load_config(args: &Args) -> Result<WorldConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            WorldConfig::from_json(&json).with_context(|| format!("loading {}", path.display()))?
        }
        None => WorldConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let mut world = World::new(config)?;
    let mut pilot = args.autopilot.then(Autopilot::default);

    log::info!("Delta-V starting: {} ticks of {} ms", args.ticks, args.delta_ms);

    for _ in 0..args.ticks {
        if let Some(pilot) = pilot.as_mut() {
            for event in pilot.steer(&world) {
                world.apply_control(event);
            }
        }

        world.update(args.delta_ms);

        for event in world.events() {
            if let GameEvent::DebrisCaptured { id, fuel_gained, .. } = event {
                log::info!("Captured debris {} (+{} fuel)", id, fuel_gained);
            }
        }

        if world.tick_count() % 100 == 0 {
            log::info!(
                "tick {}: score {}, fuel {}",
                world.tick_count(),
                world.score(),
                world.ship().fuel()
            );
        }

        if world.is_game_over() {
            break;
        }
    }

    let snapshot = world.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
