//! Error taxonomy for the mission core.
//!
//! `PreconditionError` is always recoverable: the command was rejected and
//! nothing changed. `ConfigurationError` is raised while loading config or
//! building a plan and never reaches the tick loop.

use thiserror::Error;

use crate::enums::MissionPhase;
use crate::types::Position;

/// A command was not valid in the current state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionError {
    #[error("no mission selected")]
    NoMissionSelected,
    #[error("unknown mission id {0}")]
    UnknownMission(u32),
    #[error("cannot select a mission while one is in progress ({phase:?})")]
    MissionInProgress { phase: MissionPhase },
    #[error("{command} is not allowed in phase {phase:?}")]
    InvalidPhase {
        command: &'static str,
        phase: MissionPhase,
    },
    #[error("{command} requires the vehicle to be flying")]
    NotFlying { command: &'static str },
    #[error("{command} requires the vehicle to be paused")]
    NotPaused { command: &'static str },
}

/// Malformed mission, waypoint, or engine configuration data.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{what} has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate { what: &'static str, x: f64, y: f64 },
    #[error("{what} at ({x}, {y}) is outside the operating area (|coordinate| <= {limit})")]
    CoordinateOutOfRange {
        what: &'static str,
        x: f64,
        y: f64,
        limit: f64,
    },
    #[error("battery level {0} is outside [0, 100]")]
    BatteryOutOfRange(f64),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigurationError {
    /// Check that a position is finite, naming it in the error.
    pub fn check_finite(what: &'static str, p: &Position) -> Result<(), ConfigurationError> {
        if p.is_finite() {
            Ok(())
        } else {
            Err(ConfigurationError::NonFiniteCoordinate {
                what,
                x: p.x,
                y: p.y,
            })
        }
    }

    /// Check that a position is finite and within `limit` on both axes.
    pub fn check_in_range(
        what: &'static str,
        p: &Position,
        limit: f64,
    ) -> Result<(), ConfigurationError> {
        Self::check_finite(what, p)?;
        if p.x.abs() > limit || p.y.abs() > limit {
            return Err(ConfigurationError::CoordinateOutOfRange {
                what,
                x: p.x,
                y: p.y,
                limit,
            });
        }
        Ok(())
    }
}

/// Any error the engine surface can return.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl SimError {
    /// The precondition failure, if this was a rejected command.
    pub fn as_precondition(&self) -> Option<&PreconditionError> {
        match self {
            SimError::Precondition(e) => Some(e),
            SimError::Configuration(_) => None,
        }
    }
}
