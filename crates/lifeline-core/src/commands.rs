//! Operator commands sent from a driver to the simulation.
//!
//! Commands are applied immediately; there is no queue.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VehicleCommand {
    // --- Mission setup ---
    /// Select a catalog mission; the delivery zone is drawn at random.
    SelectMission { mission_id: u32 },
    /// Select a catalog mission with a fixed delivery zone.
    SelectMissionAt { mission_id: u32, target: Position },
    /// Take off on the selected mission.
    InitiateFlight,

    // --- Flight control ---
    Pause,
    Resume,
    EmergencyLanding,
    ReturnToHome,
    DeployPayload,
}
