//! Waypoint-following motion integrator.
//!
//! Moves the vehicle a fixed distance toward the active waypoint each tick.
//! The step is not scaled by DT, so simulated speed follows the tick rate.

use glam::DVec2;

use lifeline_core::constants::{ARRIVAL_EPSILON, STEP_SIZE};
use lifeline_core::state::VehicleState;

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionStep {
    /// Plan exhausted; nothing to do.
    Idle,
    /// Moved one step. `distance` and `to_target` are measured before the move.
    Moved { distance: f64, to_target: DVec2 },
    /// Reached the waypoint at `index`; the cursor now points past it.
    Arrived { index: usize },
}

/// Advance the vehicle by one tick toward its active waypoint.
///
/// Arrival and motion never share a tick: on the tick the vehicle is within
/// `ARRIVAL_EPSILON` it only advances the cursor.
pub fn advance(vehicle: &mut VehicleState) -> MotionStep {
    let target = match vehicle.active_waypoint() {
        Some(wp) => DVec2::from(wp.position),
        None => return MotionStep::Idle,
    };
    let here = DVec2::from(vehicle.position);
    let to_target = target - here;
    let distance = to_target.length();

    // A zero distance falls in here as well, so the division below is safe.
    if distance <= ARRIVAL_EPSILON {
        let index = vehicle.current_waypoint_index;
        vehicle.current_waypoint_index += 1;
        return MotionStep::Arrived { index };
    }

    vehicle.position = (here + to_target / distance * STEP_SIZE).into();
    MotionStep::Moved {
        distance,
        to_target,
    }
}
