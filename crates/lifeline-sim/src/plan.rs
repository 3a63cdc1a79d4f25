//! Waypoint plan builder.
//!
//! Every mission flies the same six-leg shape: takeoff point, two navigation
//! waypoints on a bent approach, the delivery zone, a return waypoint, and
//! the landing pad. The navigation waypoints scale the target by different
//! per-axis factors, so the approach is not a straight line.

use rand::Rng;

use lifeline_core::constants::*;
use lifeline_core::enums::PhaseTag;
use lifeline_core::error::ConfigurationError;
use lifeline_core::state::Waypoint;
use lifeline_core::types::Position;

/// Build the plan for a mission from `origin` (the pad) to `target`.
pub fn build_plan(origin: Position, target: Position) -> Result<Vec<Waypoint>, ConfigurationError> {
    ConfigurationError::check_in_range("origin", &origin, MAX_COORDINATE)?;
    ConfigurationError::check_in_range("target", &target, MAX_COORDINATE)?;

    let plan = vec![
        waypoint(
            origin.offset(TAKEOFF_OFFSET.0, TAKEOFF_OFFSET.1),
            PhaseTag::Takeoff,
            "Takeoff Point",
        ),
        waypoint(
            target.scaled(NAV_1_SCALE.0, NAV_1_SCALE.1),
            PhaseTag::Navigation,
            "Navigation Waypoint 1",
        ),
        waypoint(
            target.scaled(NAV_2_SCALE.0, NAV_2_SCALE.1),
            PhaseTag::Navigation,
            "Navigation Waypoint 2",
        ),
        waypoint(target, PhaseTag::Delivery, "Delivery Zone"),
        waypoint(
            origin.offset(RETURN_OFFSET.0, RETURN_OFFSET.1),
            PhaseTag::Return,
            "Return Waypoint",
        ),
        waypoint(origin, PhaseTag::Landing, "Landing Zone"),
    ];
    debug_assert_eq!(plan.len(), PLAN_LEN);
    for wp in &plan {
        ConfigurationError::check_in_range("waypoint", &wp.position, MAX_COORDINATE)?;
    }
    Ok(plan)
}

/// Draw a delivery zone inside the demo's target area.
pub fn draw_target(rng: &mut impl Rng) -> Position {
    Position::new(
        TARGET_X_MIN + rng.gen::<f64>() * TARGET_X_SPAN,
        TARGET_Y_MIN + rng.gen::<f64>() * TARGET_Y_SPAN,
    )
}

fn waypoint(position: Position, tag: PhaseTag, label: &str) -> Waypoint {
    Waypoint {
        position,
        tag,
        label: label.to_string(),
    }
}
