use crate::catalog;
use crate::commands::VehicleCommand;
use crate::constants::*;
use crate::enums::*;
use crate::error::{ConfigurationError, PreconditionError};
use crate::events::SimEvent;
use crate::state::{SimSnapshot, VehicleState, Waypoint};
use crate::types::{secs_to_ticks, Position, SimTime};

// ---- Types ----

#[test]
fn test_distance_to() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
}

#[test]
fn test_offset_and_scale() {
    let p = Position::new(200.0, 100.0);
    assert_eq!(p.offset(-10.0, 5.0), Position::new(190.0, 105.0));
    assert_eq!(p.scaled(0.4, 0.8), Position::new(80.0, 80.0));
}

#[test]
fn test_non_finite_position() {
    assert!(Position::new(1.0, 2.0).is_finite());
    assert!(!Position::new(f64::NAN, 2.0).is_finite());
    assert!(!Position::new(1.0, f64::INFINITY).is_finite());
}

#[test]
fn test_sim_time_ten_ticks_one_second() {
    let mut time = SimTime::default();
    for _ in 0..10 {
        time.advance();
    }
    assert_eq!(time.tick, 10);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
}

#[test]
fn test_secs_to_ticks() {
    assert_eq!(secs_to_ticks(AUTO_DEPLOY_GRACE_SECS), 50);
    assert_eq!(secs_to_ticks(REPORT_DELAY_SECS), 30);
    assert_eq!(secs_to_ticks(0.0), 0);
}

// ---- Enums ----

#[test]
fn test_airborne_phases() {
    assert!(!MissionPhase::Ready.is_airborne());
    assert!(MissionPhase::Takeoff.is_airborne());
    assert!(MissionPhase::Navigation.is_airborne());
    assert!(MissionPhase::Delivery.is_airborne());
    assert!(MissionPhase::Return.is_airborne());
    assert!(!MissionPhase::Completed.is_airborne());
    assert!(!MissionPhase::Emergency.is_airborne());

    assert!(MissionPhase::Completed.is_terminal());
    assert!(MissionPhase::Emergency.is_terminal());
    assert!(!MissionPhase::Return.is_terminal());
}

#[test]
fn test_status_labels_are_distinct() {
    let statuses = [
        MissionStatus::Standby,
        MissionStatus::MissionSelected,
        MissionStatus::InitiatingTakeoff,
        MissionStatus::Navigating,
        MissionStatus::WaypointReached,
        MissionStatus::AtDeliveryZone,
        MissionStatus::PayloadDelivered,
        MissionStatus::ReturningToBase,
        MissionStatus::ReturnToHomeOverride,
        MissionStatus::Paused,
        MissionStatus::Resumed,
        MissionStatus::EmergencyLanding,
        MissionStatus::Complete,
    ];
    for (i, a) in statuses.iter().enumerate() {
        for b in &statuses[i + 1..] {
            assert_ne!(a.label(), b.label());
        }
    }
    assert_eq!(
        MissionStatus::MissionSelected.label(),
        "Mission Selected - Ready for Takeoff"
    );
}

// ---- Commands and events (wire shape) ----

#[test]
fn test_command_deserializes_from_tagged_json() {
    let cmd: VehicleCommand =
        serde_json::from_str(r#"{"type":"SelectMission","mission_id":2}"#).unwrap();
    assert_eq!(cmd, VehicleCommand::SelectMission { mission_id: 2 });

    let cmd: VehicleCommand = serde_json::from_str(r#"{"type":"DeployPayload"}"#).unwrap();
    assert_eq!(cmd, VehicleCommand::DeployPayload);
}

#[test]
fn test_event_serializes_with_type_tag() {
    let event = SimEvent::PhaseChanged {
        from: MissionPhase::Navigation,
        to: MissionPhase::Delivery,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "PhaseChanged");
    assert_eq!(json["from"], "Navigation");
    assert_eq!(json["to"], "Delivery");
}

#[test]
fn test_snapshot_serializes() {
    let snapshot = SimSnapshot {
        vehicle: VehicleState::parked_at(Position::new(HOME_X, HOME_Y), DEFAULT_BATTERY_LEVEL),
        events: vec![SimEvent::BatteryDepleted],
        ..Default::default()
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SimSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vehicle, snapshot.vehicle);
    assert_eq!(back.events, snapshot.events);
}

// ---- Vehicle state ----

fn vehicle_with_plan() -> VehicleState {
    let mut v = VehicleState::parked_at(Position::new(HOME_X, HOME_Y), 98.0);
    v.waypoints = (0..PLAN_LEN)
        .map(|i| Waypoint {
            position: Position::new(i as f64, i as f64),
            tag: PhaseTag::Navigation,
            label: format!("wp{i}"),
        })
        .collect();
    v
}

#[test]
fn test_active_waypoint_and_return_index() {
    let mut v = vehicle_with_plan();
    assert_eq!(v.active_waypoint().unwrap().label, "wp0");
    assert_eq!(v.return_waypoint_index(), Some(4));
    v.current_waypoint_index = PLAN_LEN;
    assert!(v.active_waypoint().is_none());

    let empty = VehicleState::default();
    assert_eq!(empty.return_waypoint_index(), None);
}

#[test]
fn test_controls_follow_phase() {
    let mut v = vehicle_with_plan();
    assert!(!v.controls().can_take_off, "No mission selected yet");

    v.current_mission = Some(1);
    let c = v.controls();
    assert!(c.can_take_off);
    assert!(!c.can_pause);
    assert!(!c.can_deploy_payload);

    v.mission_phase = MissionPhase::Delivery;
    v.is_flying = true;
    let c = v.controls();
    assert!(!c.can_take_off);
    assert!(c.can_pause);
    assert!(c.can_return_home);
    assert!(c.can_deploy_payload);
    assert!(c.can_emergency_land);

    v.is_flying = false;
    assert!(v.is_paused());
    let c = v.controls();
    assert!(c.can_resume);
    assert!(!c.can_pause);
    assert!(!c.can_return_home);
    assert!(c.can_emergency_land);

    v.mission_phase = MissionPhase::Emergency;
    assert_eq!(v.controls(), Default::default());
}

// ---- Catalog ----

#[test]
fn test_catalog_lookup() {
    assert_eq!(catalog::MISSION_SCENARIOS.len(), 3);
    let m = catalog::mission(2).unwrap();
    assert_eq!(m.name, "Mountain Rescue Operation");
    assert!(catalog::mission(99).is_none());
    assert!(catalog::supply("oxygen").is_some());
    assert!(catalog::supply("unobtainium").is_none());
}

#[test]
fn test_payload_weight_sums_supplies() {
    let m = catalog::mission(1).unwrap();
    // 0.5 + 0.05 + 0.3 + 0.1
    assert!((m.payload_weight_kg() - 0.95).abs() < 1e-9);
    let m = catalog::mission(3).unwrap();
    assert!((m.payload_weight_kg() - 3.7).abs() < 1e-9);
}

#[test]
fn test_cold_chain_detection() {
    assert!(catalog::mission(1).unwrap().needs_cold_chain());
    assert!(!catalog::mission(2).unwrap().needs_cold_chain());
    assert!(catalog::mission(3).unwrap().needs_cold_chain());
}

#[test]
fn test_weather_fallback_to_clear() {
    assert_eq!(catalog::weather_condition(WeatherKind::Snow).visibility_km, 1.0);
    let windy = catalog::weather_condition(WeatherKind::Windy);
    assert_eq!(windy.kind, WeatherKind::Clear);
}

// ---- Errors ----

#[test]
fn test_precondition_error_messages() {
    assert_eq!(
        PreconditionError::NoMissionSelected.to_string(),
        "no mission selected"
    );
    let err = PreconditionError::InvalidPhase {
        command: "deploy_payload",
        phase: MissionPhase::Navigation,
    };
    assert_eq!(
        err.to_string(),
        "deploy_payload is not allowed in phase Navigation"
    );
}

#[test]
fn test_check_finite() {
    assert!(ConfigurationError::check_finite("origin", &Position::new(1.0, 1.0)).is_ok());
    let err = ConfigurationError::check_finite("target", &Position::new(f64::NAN, 1.0))
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::NonFiniteCoordinate { what: "target", .. }
    ));
}

#[test]
fn test_check_in_range() {
    let limit = MAX_COORDINATE;
    let corner = Position::new(-limit, limit);
    assert!(ConfigurationError::check_in_range("target", &corner, limit).is_ok());
    let err = ConfigurationError::check_in_range("target", &Position::new(1e200, 0.0), limit)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::CoordinateOutOfRange { what: "target", .. }
    ));
    assert!(err.to_string().contains("outside the operating area"));
    // Non-finite input reports as such, not as out of range.
    assert!(matches!(
        ConfigurationError::check_in_range("home", &Position::new(f64::NAN, 0.0), limit),
        Err(ConfigurationError::NonFiniteCoordinate { what: "home", .. })
    ));
}
