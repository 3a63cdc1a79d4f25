//! Events emitted by the simulation for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::MissionReport;
use crate::types::Position;

/// Notifications raised by ticks and commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The vehicle arrived at a waypoint.
    WaypointReached {
        index: usize,
        tag: PhaseTag,
        label: String,
    },
    /// The mission phase changed.
    PhaseChanged { from: MissionPhase, to: MissionPhase },
    /// Payload released over the delivery zone.
    PayloadDeployed { weight_kg: f64, automatic: bool },
    /// Landed at the end of the plan.
    MissionCompleted { mission_id: u32 },
    /// Battery reached zero.
    BatteryDepleted,
    /// Motion halted by operator.
    FlightPaused,
    /// Motion resumed by operator.
    FlightResumed,
    /// Emergency landing at the current position.
    EmergencyLanding { position: Position },
    /// Manual return-to-home override.
    ReturnToHome { skipped_waypoints: usize },
    /// Outcome report is ready.
    ReportReady { report: MissionReport },
    /// Cosmetic LiDAR obstacle contact.
    ObstacleDetected { position: Position },
}
