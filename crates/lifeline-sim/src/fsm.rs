//! Mission phase state machine.
//!
//! Pure functions: waypoint arrivals map to phase updates, and command
//! guards decide whether an operator command is legal. The engine applies
//! the results and emits the events.

use lifeline_core::enums::{MissionPhase, MissionStatus, PhaseTag};
use lifeline_core::error::PreconditionError;
use lifeline_core::state::VehicleState;

/// Side effect requested by an arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalEffect {
    /// Enable the payload drop and start the auto-deploy grace window.
    ArmPayloadDrop,
    /// Land, secure the vehicle and schedule the outcome report.
    CompleteMission,
}

/// Output of the FSM for one arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalUpdate {
    pub new_phase: MissionPhase,
    pub phase_changed: bool,
    pub status: Option<MissionStatus>,
    pub effect: Option<ArrivalEffect>,
}

/// Evaluate the FSM for a waypoint arrival in `phase`.
pub fn on_arrival(phase: MissionPhase, tag: PhaseTag) -> ArrivalUpdate {
    let no_change = ArrivalUpdate {
        new_phase: phase,
        phase_changed: false,
        status: None,
        effect: None,
    };

    if !phase.is_airborne() {
        return no_change;
    }

    let (new_phase, status, effect) = match tag {
        PhaseTag::Takeoff if phase == MissionPhase::Takeoff => {
            (MissionPhase::Navigation, MissionStatus::Navigating, None)
        }
        PhaseTag::Takeoff => return no_change,
        PhaseTag::Navigation => (phase, MissionStatus::WaypointReached, None),
        PhaseTag::Delivery => (
            MissionPhase::Delivery,
            MissionStatus::AtDeliveryZone,
            Some(ArrivalEffect::ArmPayloadDrop),
        ),
        PhaseTag::Return => (MissionPhase::Return, MissionStatus::ReturningToBase, None),
        PhaseTag::Landing => (
            MissionPhase::Completed,
            MissionStatus::Complete,
            Some(ArrivalEffect::CompleteMission),
        ),
    };

    ArrivalUpdate {
        new_phase,
        phase_changed: new_phase != phase,
        status: Some(status),
        effect,
    }
}

// --- Command guards ---

pub fn check_select(vehicle: &VehicleState) -> Result<(), PreconditionError> {
    if vehicle.mission_phase.is_airborne() {
        return Err(PreconditionError::MissionInProgress {
            phase: vehicle.mission_phase,
        });
    }
    Ok(())
}

pub fn check_initiate(vehicle: &VehicleState) -> Result<(), PreconditionError> {
    if vehicle.current_mission.is_none() {
        return Err(PreconditionError::NoMissionSelected);
    }
    require_phase(vehicle, "initiate_flight", MissionPhase::Ready)
}

pub fn check_pause(vehicle: &VehicleState) -> Result<(), PreconditionError> {
    require_airborne(vehicle, "pause")?;
    require_flying(vehicle, "pause")
}

pub fn check_resume(vehicle: &VehicleState) -> Result<(), PreconditionError> {
    require_airborne(vehicle, "resume")?;
    if vehicle.is_flying {
        return Err(PreconditionError::NotPaused { command: "resume" });
    }
    Ok(())
}

/// Emergency landing is allowed from any airborne phase, paused or not.
pub fn check_emergency(vehicle: &VehicleState) -> Result<(), PreconditionError> {
    require_airborne(vehicle, "emergency_landing")
}

pub fn check_return_home(vehicle: &VehicleState) -> Result<(), PreconditionError> {
    require_airborne(vehicle, "return_to_home")?;
    require_flying(vehicle, "return_to_home")
}

pub fn check_deploy(vehicle: &VehicleState) -> Result<(), PreconditionError> {
    require_phase(vehicle, "deploy_payload", MissionPhase::Delivery)
}

fn require_phase(
    vehicle: &VehicleState,
    command: &'static str,
    phase: MissionPhase,
) -> Result<(), PreconditionError> {
    if vehicle.mission_phase != phase {
        return Err(PreconditionError::InvalidPhase {
            command,
            phase: vehicle.mission_phase,
        });
    }
    Ok(())
}

fn require_airborne(
    vehicle: &VehicleState,
    command: &'static str,
) -> Result<(), PreconditionError> {
    if !vehicle.mission_phase.is_airborne() {
        return Err(PreconditionError::InvalidPhase {
            command,
            phase: vehicle.mission_phase,
        });
    }
    Ok(())
}

fn require_flying(vehicle: &VehicleState, command: &'static str) -> Result<(), PreconditionError> {
    if !vehicle.is_flying {
        return Err(PreconditionError::NotFlying { command });
    }
    Ok(())
}
