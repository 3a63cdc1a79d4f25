//! LIFELINE mission driver.
//!
//! Usage:
//!   lifeline --mission 1 --seed 7
//!   lifeline --mission 2 --target 320,140 --at 150:pause --at 200:resume
//!   lifeline --config sim.json --realtime --json > snapshots.jsonl

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use lifeline_app::game_loop::{self, LoopOptions, DEFAULT_MAX_TICKS};
use lifeline_app::script::{self, ScriptedCommand};
use lifeline_app::sink::ConsoleSink;
use lifeline_core::types::Position;
use lifeline_sim::{SimConfig, SimulationEngine};

/// Headless delivery-drone mission simulator
#[derive(Parser, Debug)]
#[command(name = "lifeline")]
#[command(about = "Fly a medical delivery mission and print the outcome report")]
struct Args {
    /// Catalog mission to fly (1-3)
    #[arg(long, short = 'm', default_value_t = 1)]
    mission: u32,

    /// Engine config file (JSON). Missing fields take defaults.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the RNG seed from the config
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Fixed delivery zone as X,Y instead of a random draw
    #[arg(long, value_parser = parse_position)]
    target: Option<Position>,

    /// Operator command as TICK:ACTION (pause, resume, emergency, return, deploy).
    /// Can be specified multiple times.
    #[arg(long = "at")]
    script: Vec<ScriptedCommand>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Run at 10Hz wall-clock rate on the mission loop thread
    #[arg(long)]
    realtime: bool,

    /// Print every snapshot to stdout as a JSON line
    #[arg(long)]
    json: bool,

    /// Disable cosmetic GPS/link telemetry
    #[arg(long)]
    no_ambient: bool,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("Invalid X,Y position: {}", s))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("Invalid x in {}", s))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("Invalid y in {}", s))?;
    Ok(Position::new(x, y))
}

fn load_config(args: &Args) -> anyhow::Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SimConfig::from_json_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.no_ambient {
        config.ambient_telemetry = false;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(seed = config.seed, ambient = config.ambient_telemetry, "engine configured");

    let mut engine = SimulationEngine::new(config)?;
    let summary = match args.target {
        Some(target) => engine.select_mission_at(args.mission, target)?,
        None => engine.select_mission(args.mission)?,
    };
    info!(
        mission = %summary.name,
        urgency = ?summary.urgency,
        supplies = summary.supplies.len(),
        payload_kg = summary.payload_weight_kg,
        "briefing"
    );
    engine.initiate_flight()?;

    let script = script::ordered(args.script.clone());
    let options = LoopOptions {
        max_ticks: args.max_ticks,
        ..Default::default()
    };
    let sink = ConsoleSink::new(args.json);

    let exit = if args.realtime {
        game_loop::run_realtime(engine, sink, &script, options)?
    } else {
        let mut sink = sink;
        game_loop::run_headless(&mut engine, &mut sink, &script, options)
    };

    info!(reason = ?exit.reason, ticks = exit.ticks, "simulation finished");
    if !args.json {
        if let Some(report) = &exit.report {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
