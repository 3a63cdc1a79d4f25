//! Vehicle state and the snapshot handed to the presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::catalog::GeoPoint;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// A point in the mission plan. Immutable once the plan is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Position,
    pub tag: PhaseTag,
    pub label: String,
}

/// Payload bay state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadState {
    pub weight_kg: f64,
    /// Any supply on board needs refrigerated storage.
    pub cold_chain: bool,
    /// Set once the payload has been dropped at the delivery zone.
    pub delivered: bool,
}

/// The mutable simulation state of the vehicle.
///
/// One instance lives for the whole engine lifetime. The plan, cursor and
/// current mission are replaced on every mission selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: Position,
    /// Meters above ground, never negative.
    pub altitude: f64,
    /// Derived from the last move, never negative.
    pub speed: f64,
    /// Degrees in [0, 360).
    pub heading: f64,
    /// Percent in [0, 100].
    pub battery_level: f64,
    pub is_flying: bool,
    pub mission_phase: MissionPhase,
    pub waypoints: Vec<Waypoint>,
    /// Cursor into `waypoints`. Only increases; equals `waypoints.len()`
    /// once the plan is exhausted.
    pub current_waypoint_index: usize,
    pub current_mission: Option<u32>,
    pub payload: PayloadState,
    pub status: MissionStatus,
}

impl VehicleState {
    /// A vehicle parked at `home` with the given charge.
    pub fn parked_at(home: Position, battery_level: f64) -> Self {
        Self {
            position: home,
            battery_level,
            ..Default::default()
        }
    }

    /// The waypoint currently being flown to, if any remain.
    pub fn active_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.get(self.current_waypoint_index)
    }

    /// Airborne but holding position.
    pub fn is_paused(&self) -> bool {
        !self.is_flying && self.mission_phase.is_airborne()
    }

    /// Index of the designated return waypoint (second to last).
    pub fn return_waypoint_index(&self) -> Option<usize> {
        self.waypoints.len().checked_sub(2)
    }

    /// Which operator controls are currently usable.
    pub fn controls(&self) -> ControlState {
        let phase = self.mission_phase;
        ControlState {
            can_take_off: phase == MissionPhase::Ready && self.current_mission.is_some(),
            can_pause: self.is_flying && phase.is_airborne(),
            can_resume: self.is_paused(),
            can_return_home: self.is_flying && phase.is_airborne(),
            can_deploy_payload: phase == MissionPhase::Delivery,
            can_emergency_land: phase.is_airborne(),
        }
    }
}

/// Control enablement derived from the vehicle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub can_take_off: bool,
    pub can_pause: bool,
    pub can_resume: bool,
    pub can_return_home: bool,
    pub can_deploy_payload: bool,
    pub can_emergency_land: bool,
}

/// Summary returned when a mission is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub urgency: Urgency,
    pub supplies: Vec<String>,
    pub payload_weight_kg: f64,
    pub weather: WeatherKind,
    /// Visibility for the mission weather (km).
    pub visibility_km: f64,
    /// Wind speed for the mission weather (km/h).
    pub wind_speed_kmh: f64,
    /// Expected flight impact of the weather, e.g. `"moderate"`.
    pub weather_impact: String,
    pub threat_level: ThreatLevel,
    /// Incident location (display only).
    pub location: GeoPoint,
    /// Delivery zone drawn for this mission.
    pub target: Position,
}

/// Mission outcome report, generated a few seconds after landing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    pub mission_id: u32,
    pub mission_name: String,
    pub outcome: MissionOutcome,
    /// Simulated seconds from takeoff to report generation.
    pub duration_secs: f64,
    /// Path length flown, in plane units.
    pub distance_traveled: f64,
    pub payload_delivered: bool,
    pub urgency: Urgency,
    pub max_altitude: f64,
    /// Battery percent used since takeoff.
    pub battery_consumed: f64,
    pub supplies: Vec<String>,
    pub weather: WeatherKind,
    pub threat_level: ThreatLevel,
    pub waypoints_reached: u32,
}

/// Cosmetic link and sensor readings. Never read by the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmbientView {
    pub gps_satellites: u32,
    pub gps_accuracy_m: f64,
    pub signal_strength: i32,
    pub latency_ms: i32,
    pub payload_temperature_c: f64,
}

/// State broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub vehicle: VehicleState,
    pub controls: ControlState,
    pub ambient: AmbientView,
    /// Events raised since the previous snapshot, oldest first.
    pub events: Vec<SimEvent>,
}
