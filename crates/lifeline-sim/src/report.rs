//! Flight statistics and the mission outcome report.
//!
//! Stored in the engine, not in `VehicleState`.

use lifeline_core::catalog::MissionScenario;
use lifeline_core::enums::{MissionOutcome, MissionPhase};
use lifeline_core::state::{MissionReport, VehicleState};

/// Running statistics for the current flight.
#[derive(Debug, Clone, Default)]
pub struct FlightStats {
    /// Elapsed sim seconds at takeoff (None before takeoff).
    pub started_at_secs: Option<f64>,
    pub start_battery: f64,
    pub distance_traveled: f64,
    pub max_altitude: f64,
    pub waypoints_reached: u32,
}

impl FlightStats {
    pub fn start(&mut self, now_secs: f64, battery_level: f64) {
        *self = Self {
            started_at_secs: Some(now_secs),
            start_battery: battery_level,
            ..Default::default()
        };
    }

    pub fn record_move(&mut self, step: f64, altitude: f64) {
        self.distance_traveled += step;
        self.max_altitude = self.max_altitude.max(altitude);
    }

    pub fn record_waypoint(&mut self) {
        self.waypoints_reached += 1;
    }
}

/// Build the outcome report for a mission.
pub fn build_report(
    scenario: &MissionScenario,
    vehicle: &VehicleState,
    stats: &FlightStats,
    now_secs: f64,
) -> MissionReport {
    let outcome = if vehicle.mission_phase == MissionPhase::Completed {
        MissionOutcome::Completed
    } else {
        MissionOutcome::Incomplete
    };
    let (duration_secs, battery_consumed) = match stats.started_at_secs {
        Some(start) => (
            now_secs - start,
            (stats.start_battery - vehicle.battery_level).max(0.0),
        ),
        None => (0.0, 0.0),
    };

    MissionReport {
        mission_id: scenario.id,
        mission_name: scenario.name.to_string(),
        outcome,
        duration_secs,
        distance_traveled: stats.distance_traveled,
        payload_delivered: vehicle.payload.delivered,
        urgency: scenario.urgency,
        max_altitude: stats.max_altitude,
        battery_consumed,
        supplies: scenario
            .resolved_supplies()
            .map(|s| s.name.to_string())
            .collect(),
        weather: scenario.weather,
        threat_level: scenario.threat_level,
        waypoints_reached: stats.waypoints_reached,
    }
}
