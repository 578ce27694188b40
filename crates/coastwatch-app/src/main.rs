//! Coastwatch driver binary.
//!
//! Runs the patrol simulation in real time (or fast-forward with
//! `--headless`) and prints the tactical log through `tracing`. In real time
//! the loop takes `pause`, `resume`, `scale <x>` and `quit` on stdin.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use coastwatch_app::config::AppConfig;
use coastwatch_app::console::ConsoleSink;
use coastwatch_app::game_loop;
use coastwatch_app::state::{shared_display, DisplayState};
use coastwatch_app::Result;
use coastwatch_sim::SimulationEngine;

/// Coastal patrol drone simulation
#[derive(Parser, Debug)]
#[command(name = "coastwatch")]
#[command(about = "Simulate a coastal drone patrol: detection, tracking, lock and intercept")]
struct Args {
    /// TOML config file with [sim] and [driver] tables
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many simulated seconds
    #[arg(long, short = 'd')]
    duration: Option<f64>,

    /// Simulated seconds per wall-clock second
    #[arg(long)]
    time_scale: Option<f64>,

    /// Fast-forward without sleeping (requires a duration)
    #[arg(long)]
    headless: bool,

    /// Print the final snapshot as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coastwatch=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.sim.seed = seed;
    }
    if let Some(duration) = args.duration {
        config.driver.duration_secs = Some(duration);
    }
    if let Some(scale) = args.time_scale {
        config.driver.time_scale = scale;
    }
    config.validate()?;

    let mut engine = SimulationEngine::new(config.sim.clone())?;
    let display = shared_display(config.driver.log_capacity);

    if args.headless {
        let mut sink = ConsoleSink::new(display.clone());
        game_loop::run_headless(&mut engine, &config.driver, &mut sink)?;
        if let Ok(mut state) = display.lock() {
            state.snapshot = Some(engine.snapshot());
        }
    } else {
        let handle = game_loop::spawn_sim_loop(engine, config.driver.clone(), display.clone())?;
        let (commands_tx, commands_rx) = mpsc::channel();
        // Detached: a blocked stdin read must not hold up exit.
        let _console = game_loop::spawn_command_reader(std::io::stdin(), commands_tx)?;
        game_loop::supervise(handle, &commands_rx)?;
    }

    let state = match display.lock() {
        Ok(state) => state.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    summarize(&state);

    if args.json {
        if let Some(snapshot) = &state.snapshot {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
    }
    Ok(())
}

fn summarize(state: &DisplayState) {
    let elapsed_secs = state
        .snapshot
        .as_ref()
        .map(|s| s.time.elapsed_secs())
        .unwrap_or_default();
    let (vessels, enemies, weather) = match (&state.stats, &state.snapshot) {
        (Some(stats), _) => (stats.total(), stats.enemy, stats.weather.label()),
        (None, Some(snapshot)) => (snapshot.targets.len() as u32, 0, snapshot.weather.label()),
        (None, None) => (0, 0, "unknown"),
    };
    tracing::info!(
        elapsed_secs,
        vessels,
        enemies,
        weather,
        locks = state.locks,
        kills = state.kills,
        log_entries = state.log.len(),
        "run complete"
    );
}
