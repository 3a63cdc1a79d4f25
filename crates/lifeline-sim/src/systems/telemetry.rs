//! Telemetry derivation: speed and heading from the step, altitude by phase.

use glam::DVec2;

use lifeline_core::constants::*;
use lifeline_core::enums::MissionPhase;
use lifeline_core::state::VehicleState;

/// Update speed and heading after a move.
pub fn update_kinematics(vehicle: &mut VehicleState, distance: f64, to_target: DVec2) {
    vehicle.speed = (distance * SPEED_SCALE).min(SPEED_CAP);
    vehicle.heading = heading_degrees(to_target);
}

/// Heading of a plane vector in degrees, normalized into [0, 360).
/// Measured from +x toward +y, like `atan2(dy, dx)`.
pub fn heading_degrees(v: DVec2) -> f64 {
    let deg = v.y.atan2(v.x).to_degrees().rem_euclid(360.0);
    // rem_euclid can round a tiny negative angle up to exactly 360.
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Climb, cruise or descend according to the current phase.
pub fn update_altitude(vehicle: &mut VehicleState) {
    let alt = vehicle.altitude;
    vehicle.altitude = match vehicle.mission_phase {
        MissionPhase::Takeoff if alt < TAKEOFF_ALTITUDE_CAP => {
            (alt + TAKEOFF_CLIMB_RATE).min(TAKEOFF_ALTITUDE_CAP)
        }
        MissionPhase::Navigation if alt < CRUISE_ALTITUDE_CAP => {
            (alt + CRUISE_CLIMB_RATE).min(CRUISE_ALTITUDE_CAP)
        }
        MissionPhase::Delivery if alt > DELIVERY_ALTITUDE_FLOOR => {
            (alt - DELIVERY_DESCENT_RATE).max(DELIVERY_ALTITUDE_FLOOR)
        }
        _ => alt,
    };
}
