//! Dorm Dash headless entry point
//!
//! Runs the simulation under the demo autopilot at a simulated 60 fps host
//! frame rate and prints the final world snapshot as JSON.

use std::path::PathBuf;

use clap::Parser;
use dorm_dash::consts::SIM_DT;
use dorm_dash::sim::{FixedStep, GameEvent, GameState, autopilot_input};
use dorm_dash::{GameConfig, SimResult};

const DEFAULT_FRAMES: u32 = 60 * 120;
const DEFAULT_SEED: u64 = 0x00d0_4d45;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON config; built-in defaults when omitted
    config: Option<PathBuf>,

    /// World seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Host frames to simulate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u32,
}

fn run(args: Args) -> SimResult<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut state = GameState::new(config, args.seed)?;
    log::info!("Game initialized with seed: {}", args.seed);

    let mut clock = FixedStep::new();
    for _ in 0..args.frames {
        for _ in 0..clock.advance(SIM_DT) {
            let input = autopilot_input(&state);
            state.update(&input, SIM_DT)?;
            for event in &state.events {
                if let GameEvent::LevelStarted { level, variant } = event {
                    log::info!("Now playing level {} on {}", level, variant);
                }
            }
        }
    }

    log::info!("Session: {:?}", state.session);
    let json = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{json}");
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::init();
    log::info!("Dorm Dash (headless) starting...");

    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
