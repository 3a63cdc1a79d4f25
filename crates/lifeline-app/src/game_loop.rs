//! Mission loop: runs the simulation engine at 10Hz and emits snapshots.
//!
//! The realtime loop owns the engine on its own thread. Operator commands
//! arrive via an `mpsc` channel, snapshots go to a `SnapshotSink` and are
//! stored in shared state for synchronous polling. The headless loop runs
//! the same steps back to back on the caller's thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use tracing::{debug, info, warn};

use lifeline_core::commands::VehicleCommand;
use lifeline_core::constants::TICK_RATE;
use lifeline_core::events::SimEvent;
use lifeline_core::state::{MissionReport, SimSnapshot};
use lifeline_sim::SimulationEngine;

use crate::script::ScriptedCommand;
use crate::sink::SnapshotSink;
use crate::state::{DriverState, LoopCommand};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Default tick budget: ten minutes of sim time.
pub const DEFAULT_MAX_TICKS: u64 = 6000;

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Wall-clock duration of one tick (realtime loop only).
    pub tick_duration: Duration,
    /// Stop after this many ticks.
    pub max_ticks: u64,
    /// Stop on the tick the mission report becomes available.
    pub stop_on_report: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            tick_duration: TICK_DURATION,
            max_ticks: DEFAULT_MAX_TICKS,
            stop_on_report: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Shutdown,
    Disconnected,
    ReportReady,
    TickLimit,
}

/// How and where the loop stopped.
#[derive(Debug, Clone)]
pub struct LoopExit {
    pub reason: ExitReason,
    pub ticks: u64,
    /// The delivered report, or the engine's report as of the exit tick.
    pub report: Option<MissionReport>,
}

/// Spawns the mission loop in a new thread.
///
/// Returns the driver handles for the operator side and the join handle.
pub fn spawn_mission_loop<S>(
    engine: SimulationEngine,
    sink: S,
    options: LoopOptions,
) -> anyhow::Result<(DriverState, JoinHandle<LoopExit>)>
where
    S: SnapshotSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("lifeline-mission-loop".into())
        .spawn(move || run_mission_loop(engine, cmd_rx, sink, &shared, options))
        .context("failed to spawn mission loop thread")?;

    Ok((
        DriverState {
            command_tx: cmd_tx,
            latest_snapshot,
        },
        handle,
    ))
}

/// Run a mission in realtime, issuing scripted commands as the sim reaches
/// their ticks. Blocks until the loop exits.
pub fn run_realtime<S>(
    engine: SimulationEngine,
    sink: S,
    script: &[ScriptedCommand],
    options: LoopOptions,
) -> anyhow::Result<LoopExit>
where
    S: SnapshotSink + Send + 'static,
{
    let (driver, handle) = spawn_mission_loop(engine, sink, options)?;

    'script: for entry in script {
        while driver.latest_tick() < entry.at_tick {
            if handle.is_finished() {
                break 'script;
            }
            std::thread::sleep(options.tick_duration / 2);
        }
        if !driver.send(entry.command.clone()) {
            break;
        }
    }

    handle
        .join()
        .map_err(|_| anyhow!("mission loop thread panicked"))
}

/// Run a mission as fast as possible on the current thread.
///
/// A scripted command is applied once the sim has reached its tick, before
/// the next tick runs.
pub fn run_headless(
    engine: &mut SimulationEngine,
    sink: &mut impl SnapshotSink,
    script: &[ScriptedCommand],
    options: LoopOptions,
) -> LoopExit {
    let mut pending = script.iter().peekable();
    let mut delivered = None;

    loop {
        let now = engine.time().tick;
        while let Some(entry) = pending.next_if(|c| c.at_tick <= now) {
            apply_command(engine, entry.command.clone());
        }

        let snapshot = engine.tick();
        sink.emit(&snapshot);
        if let Some(report) = delivered_report(&snapshot) {
            delivered = Some(report);
            if options.stop_on_report {
                return finish(engine, ExitReason::ReportReady, delivered);
            }
        }
        if snapshot.time.tick >= options.max_ticks {
            return finish(engine, ExitReason::TickLimit, delivered);
        }
    }
}

/// The loop body. Runs until Shutdown, disconnect, report or tick limit.
fn run_mission_loop<S: SnapshotSink>(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    mut sink: S,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
    options: LoopOptions,
) -> LoopExit {
    let mut next_tick_time = Instant::now();
    let mut delivered = None;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Vehicle(cmd)) => apply_command(&mut engine, cmd),
                Ok(LoopCommand::Shutdown) => {
                    return finish(&engine, ExitReason::Shutdown, delivered);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    return finish(&engine, ExitReason::Disconnected, delivered);
                }
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Emit and publish
        sink.emit(&snapshot);
        let tick = snapshot.time.tick;
        let report = delivered_report(&snapshot);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if let Some(report) = report {
            delivered = Some(report);
            if options.stop_on_report {
                return finish(&engine, ExitReason::ReportReady, delivered);
            }
        }
        if tick >= options.max_ticks {
            return finish(&engine, ExitReason::TickLimit, delivered);
        }

        // 4. Sleep until next tick
        next_tick_time += options.tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > options.tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            debug!(tick, "mission loop fell behind, resetting tick clock");
            next_tick_time = now;
        }
    }
}

fn apply_command(engine: &mut SimulationEngine, command: VehicleCommand) {
    let tick = engine.time().tick;
    match engine.apply(command.clone()) {
        Ok(()) => info!(tick, ?command, "command accepted"),
        Err(e) => warn!(tick, ?command, error = %e, "command rejected"),
    }
}

fn delivered_report(snapshot: &SimSnapshot) -> Option<MissionReport> {
    snapshot.events.iter().find_map(|e| match e {
        SimEvent::ReportReady { report } => Some(report.clone()),
        _ => None,
    })
}

fn finish(
    engine: &SimulationEngine,
    reason: ExitReason,
    delivered: Option<MissionReport>,
) -> LoopExit {
    LoopExit {
        reason,
        ticks: engine.time().tick,
        report: delivered.or_else(|| engine.mission_report()),
    }
}
