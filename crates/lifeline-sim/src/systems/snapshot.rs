//! Snapshot system: copies the vehicle state into a `SimSnapshot`.
//!
//! This system is read-only. It never modifies the vehicle.

use lifeline_core::events::SimEvent;
use lifeline_core::state::{AmbientView, SimSnapshot, VehicleState};
use lifeline_core::types::SimTime;

pub fn build_snapshot(
    time: &SimTime,
    vehicle: &VehicleState,
    ambient: Option<&AmbientView>,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        vehicle: vehicle.clone(),
        controls: vehicle.controls(),
        ambient: ambient.cloned().unwrap_or_default(),
        events,
    }
}
