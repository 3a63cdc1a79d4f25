//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Role of a waypoint in the plan. Selects the arrival behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseTag {
    Takeoff,
    Navigation,
    Delivery,
    Return,
    Landing,
}

/// Mission phase (state of the mission phase machine).
///
/// Pause is not a phase: a paused vehicle keeps its airborne phase with
/// `is_flying == false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// On the pad, waiting for a mission or for takeoff.
    #[default]
    Ready,
    /// Climbing out toward the takeoff point.
    Takeoff,
    /// En route to the delivery zone.
    Navigation,
    /// Over the delivery zone, payload drop enabled.
    Delivery,
    /// Heading back to base.
    Return,
    /// Landed after a full mission.
    Completed,
    /// Emergency landing. Terminal until a new mission is selected.
    Emergency,
}

impl MissionPhase {
    /// Phases in which the vehicle is in the air (flying or paused).
    pub fn is_airborne(self) -> bool {
        matches!(
            self,
            MissionPhase::Takeoff
                | MissionPhase::Navigation
                | MissionPhase::Delivery
                | MissionPhase::Return
        )
    }

    /// Phases that end a mission.
    pub fn is_terminal(self) -> bool {
        matches!(self, MissionPhase::Completed | MissionPhase::Emergency)
    }
}

/// Operator-facing mission status. Each variant has a fixed label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    #[default]
    Standby,
    MissionSelected,
    InitiatingTakeoff,
    Navigating,
    WaypointReached,
    AtDeliveryZone,
    PayloadDelivered,
    ReturningToBase,
    ReturnToHomeOverride,
    Paused,
    Resumed,
    EmergencyLanding,
    Complete,
}

impl MissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            MissionStatus::Standby => "Standby - Select a Mission",
            MissionStatus::MissionSelected => "Mission Selected - Ready for Takeoff",
            MissionStatus::InitiatingTakeoff => "Initiating Takeoff Sequence",
            MissionStatus::Navigating => "Navigating to Target Zone",
            MissionStatus::WaypointReached => "Navigation Waypoint Reached",
            MissionStatus::AtDeliveryZone => "At Delivery Zone - Ready to Deploy",
            MissionStatus::PayloadDelivered => "Payload Delivered - Returning to Base",
            MissionStatus::ReturningToBase => "Returning to Base",
            MissionStatus::ReturnToHomeOverride => "Return to Home - Manual Override",
            MissionStatus::Paused => "Mission Paused",
            MissionStatus::Resumed => "Mission Resumed",
            MissionStatus::EmergencyLanding => "Emergency Landing in Progress",
            MissionStatus::Complete => "Mission Complete - All Systems Secured",
        }
    }
}

/// Mission or supply urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

/// Weather at the delivery site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherKind {
    #[default]
    Clear,
    Cloudy,
    Rain,
    Snow,
    Storm,
    Windy,
}

/// Assessed threat level along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

/// Final outcome recorded in a mission report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionOutcome {
    Completed,
    Incomplete,
}
