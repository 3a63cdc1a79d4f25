//! Snapshot sinks: where the mission loop sends each tick's output.

use std::io::Write;

use tracing::{info, warn};

use lifeline_core::events::SimEvent;
use lifeline_core::state::SimSnapshot;

/// Receives every snapshot the loop produces.
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &SimSnapshot);
}

/// Collects snapshots in memory.
impl SnapshotSink for Vec<SimSnapshot> {
    fn emit(&mut self, snapshot: &SimSnapshot) {
        self.push(snapshot.clone());
    }
}

/// Writes snapshots to stdout as JSON lines, or logs their events.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    json: bool,
}

impl ConsoleSink {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl SnapshotSink for ConsoleSink {
    fn emit(&mut self, snapshot: &SimSnapshot) {
        if self.json {
            match serde_json::to_string(snapshot) {
                Ok(line) => {
                    let mut out = std::io::stdout().lock();
                    let _ = writeln!(out, "{line}");
                }
                Err(e) => warn!(error = %e, "failed to serialize snapshot"),
            }
            return;
        }
        for event in &snapshot.events {
            log_event(snapshot.time.elapsed_secs, event);
        }
    }
}

fn log_event(t: f64, event: &SimEvent) {
    match event {
        SimEvent::WaypointReached { index, label, .. } => {
            info!(t, index, label = %label, "waypoint reached")
        }
        SimEvent::PhaseChanged { from, to } => info!(t, ?from, ?to, "phase changed"),
        SimEvent::PayloadDeployed {
            weight_kg,
            automatic,
        } => info!(t, weight_kg, automatic, "payload deployed"),
        SimEvent::MissionCompleted { mission_id } => info!(t, mission_id, "mission completed"),
        SimEvent::BatteryDepleted => warn!(t, "battery depleted"),
        SimEvent::FlightPaused => info!(t, "flight paused"),
        SimEvent::FlightResumed => info!(t, "flight resumed"),
        SimEvent::EmergencyLanding { position } => {
            warn!(t, x = position.x, y = position.y, "emergency landing")
        }
        SimEvent::ReturnToHome { skipped_waypoints } => {
            info!(t, skipped_waypoints, "returning to home")
        }
        SimEvent::ReportReady { report } => {
            info!(t, mission = %report.mission_name, outcome = ?report.outcome, "report ready")
        }
        SimEvent::ObstacleDetected { position } => {
            warn!(t, x = position.x, y = position.y, "obstacle detected")
        }
    }
}
