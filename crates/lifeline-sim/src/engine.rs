//! Simulation engine: the mission core.
//!
//! `SimulationEngine` owns the vehicle state, applies operator commands,
//! runs all systems once per tick, and produces `SimSnapshot`s. Completely
//! headless (no driver or UI dependency), enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use lifeline_core::catalog::{self, MissionScenario};
use lifeline_core::commands::VehicleCommand;
use lifeline_core::constants::{AUTO_DEPLOY_GRACE_SECS, REPORT_DELAY_SECS, STEP_SIZE};
use lifeline_core::enums::{MissionPhase, MissionStatus};
use lifeline_core::error::{ConfigurationError, PreconditionError, SimError};
use lifeline_core::events::SimEvent;
use lifeline_core::state::{
    ControlState, MissionReport, MissionSummary, PayloadState, SimSnapshot, VehicleState,
};
use lifeline_core::types::{Position, SimTime};

use crate::config::{SimConfig, AMBIENT_SEED_SALT};
use crate::fsm::{self, ArrivalEffect};
use crate::plan;
use crate::report::{self, FlightStats};
use crate::schedule::{EffectKind, EffectSchedule, ScheduledEffect};
use crate::systems;
use crate::systems::ambient::AmbientTelemetry;
use crate::systems::motion::MotionStep;

/// The mission currently loaded on the vehicle.
#[derive(Debug, Clone)]
struct SelectedMission {
    scenario: &'static MissionScenario,
    target: Position,
}

/// The simulation engine. Owns the vehicle and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    vehicle: VehicleState,
    time: SimTime,
    rng: ChaCha8Rng,
    ambient: Option<AmbientTelemetry>,
    effects: EffectSchedule,
    events: Vec<SimEvent>,
    stats: FlightStats,
    selected: Option<SelectedMission>,
    /// Bumped on every mission selection; stale delayed effects compare
    /// against it.
    mission_epoch: u32,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let ambient = config
            .ambient_telemetry
            .then(|| AmbientTelemetry::new(config.seed ^ AMBIENT_SEED_SALT));
        Ok(Self {
            vehicle: VehicleState::parked_at(config.home, config.initial_battery),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ambient,
            effects: EffectSchedule::default(),
            events: Vec::new(),
            stats: FlightStats::default(),
            selected: None,
            mission_epoch: 0,
            config,
        })
    }

    // ---- Commands ----

    /// Apply an operator command immediately.
    pub fn apply(&mut self, command: VehicleCommand) -> Result<(), SimError> {
        match command {
            VehicleCommand::SelectMission { mission_id } => {
                self.select_mission(mission_id)?;
            }
            VehicleCommand::SelectMissionAt { mission_id, target } => {
                self.select_mission_at(mission_id, target)?;
            }
            VehicleCommand::InitiateFlight => self.initiate_flight()?,
            VehicleCommand::Pause => self.try_pause()?,
            VehicleCommand::Resume => self.try_resume()?,
            VehicleCommand::EmergencyLanding => self.try_emergency_landing()?,
            VehicleCommand::ReturnToHome => self.try_return_to_home()?,
            VehicleCommand::DeployPayload => self.try_deploy_payload()?,
        }
        Ok(())
    }

    /// Select a catalog mission with a randomly drawn delivery zone.
    pub fn select_mission(&mut self, mission_id: u32) -> Result<MissionSummary, SimError> {
        fsm::check_select(&self.vehicle)?;
        if catalog::mission(mission_id).is_none() {
            return Err(PreconditionError::UnknownMission(mission_id).into());
        }
        let target = plan::draw_target(&mut self.rng);
        self.select_mission_at(mission_id, target)
    }

    /// Select a catalog mission with a fixed delivery zone.
    ///
    /// Replaces the plan, resets the cursor and loads the payload. Legal on
    /// the pad and after a completed or aborted mission.
    pub fn select_mission_at(
        &mut self,
        mission_id: u32,
        target: Position,
    ) -> Result<MissionSummary, SimError> {
        fsm::check_select(&self.vehicle)?;
        let scenario =
            catalog::mission(mission_id).ok_or(PreconditionError::UnknownMission(mission_id))?;
        let waypoints = plan::build_plan(self.config.home, target)?;

        let cold_chain = scenario.needs_cold_chain();
        self.vehicle.waypoints = waypoints;
        self.vehicle.current_waypoint_index = 0;
        self.vehicle.current_mission = Some(scenario.id);
        self.vehicle.is_flying = false;
        self.vehicle.speed = 0.0;
        self.vehicle.payload = PayloadState {
            weight_kg: scenario.payload_weight_kg(),
            cold_chain,
            delivered: false,
        };
        self.set_phase(MissionPhase::Ready);
        self.vehicle.status = MissionStatus::MissionSelected;

        self.mission_epoch += 1;
        self.stats = FlightStats::default();
        self.selected = Some(SelectedMission { scenario, target });
        if let Some(ambient) = &mut self.ambient {
            ambient.load_payload(cold_chain);
        }

        info!(
            mission = scenario.name,
            target_x = target.x,
            target_y = target.y,
            payload_kg = self.vehicle.payload.weight_kg,
            "mission selected"
        );
        Ok(self.summary(scenario, target))
    }

    /// Take off on the selected mission.
    pub fn initiate_flight(&mut self) -> Result<(), PreconditionError> {
        fsm::check_initiate(&self.vehicle)?;
        self.vehicle.is_flying = true;
        self.set_phase(MissionPhase::Takeoff);
        self.vehicle.status = MissionStatus::InitiatingTakeoff;
        self.stats
            .start(self.time.elapsed_secs, self.vehicle.battery_level);
        info!(mission = ?self.vehicle.current_mission, "takeoff sequence initiated");
        Ok(())
    }

    /// Hold position. Returns whether the command was accepted.
    pub fn pause(&mut self) -> bool {
        self.try_pause().is_ok()
    }

    pub fn resume(&mut self) -> bool {
        self.try_resume().is_ok()
    }

    pub fn emergency_landing(&mut self) -> bool {
        self.try_emergency_landing().is_ok()
    }

    pub fn return_to_home(&mut self) -> bool {
        self.try_return_to_home().is_ok()
    }

    pub fn deploy_payload(&mut self) -> bool {
        self.try_deploy_payload().is_ok()
    }

    pub fn try_pause(&mut self) -> Result<(), PreconditionError> {
        fsm::check_pause(&self.vehicle)?;
        self.vehicle.is_flying = false;
        self.vehicle.speed = 0.0;
        self.vehicle.status = MissionStatus::Paused;
        self.events.push(SimEvent::FlightPaused);
        info!("mission paused, holding position");
        Ok(())
    }

    pub fn try_resume(&mut self) -> Result<(), PreconditionError> {
        fsm::check_resume(&self.vehicle)?;
        self.vehicle.is_flying = true;
        self.vehicle.status = MissionStatus::Resumed;
        self.events.push(SimEvent::FlightResumed);
        info!("mission resumed");
        Ok(())
    }

    pub fn try_emergency_landing(&mut self) -> Result<(), PreconditionError> {
        fsm::check_emergency(&self.vehicle)?;
        self.vehicle.is_flying = false;
        self.vehicle.speed = 0.0;
        self.set_phase(MissionPhase::Emergency);
        self.vehicle.status = MissionStatus::EmergencyLanding;
        self.events.push(SimEvent::EmergencyLanding {
            position: self.vehicle.position,
        });
        warn!(
            x = self.vehicle.position.x,
            y = self.vehicle.position.y,
            "emergency landing, mission aborted"
        );
        Ok(())
    }

    /// Jump straight to the return waypoint, skipping anything unvisited.
    /// The cursor never moves backwards.
    pub fn try_return_to_home(&mut self) -> Result<(), PreconditionError> {
        fsm::check_return_home(&self.vehicle)?;
        let cursor = self.vehicle.current_waypoint_index;
        let return_index = self.vehicle.return_waypoint_index().unwrap_or(cursor);
        let skipped_waypoints = return_index.saturating_sub(cursor);
        self.vehicle.current_waypoint_index = cursor.max(return_index);
        self.set_phase(MissionPhase::Return);
        self.vehicle.status = MissionStatus::ReturnToHomeOverride;
        self.events.push(SimEvent::ReturnToHome { skipped_waypoints });
        warn!(skipped_waypoints, "manual return to home");
        Ok(())
    }

    pub fn try_deploy_payload(&mut self) -> Result<(), PreconditionError> {
        self.deploy(false)
    }

    // ---- Queries ----

    /// Read-only view of the vehicle.
    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    pub fn phase(&self) -> MissionPhase {
        self.vehicle.mission_phase
    }

    pub fn current_waypoint_index(&self) -> usize {
        self.vehicle.current_waypoint_index
    }

    pub fn controls(&self) -> ControlState {
        self.vehicle.controls()
    }

    pub fn pending_effects(&self) -> &[ScheduledEffect] {
        self.effects.pending()
    }

    /// Number of pending effects of one kind.
    pub fn pending_effect_count(&self, kind: EffectKind) -> usize {
        self.effects.count(kind)
    }

    /// Events raised by commands since the last tick, not yet delivered.
    pub fn pending_events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Delivery zone of the selected mission.
    pub fn target(&self) -> Option<Position> {
        self.selected.as_ref().map(|m| m.target)
    }

    /// Owned copy of the current state. Does not drain pending events.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(
            &self.time,
            &self.vehicle,
            self.ambient.as_ref().map(|a| a.view()),
            Vec::new(),
        )
    }

    /// Outcome report for the selected mission as of now.
    pub fn mission_report(&self) -> Option<MissionReport> {
        self.selected.as_ref().map(|m| {
            report::build_report(m.scenario, &self.vehicle, &self.stats, self.time.elapsed_secs)
        })
    }

    // ---- Tick ----

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Simulation time advances on every call, paused or not, so delayed
    /// effects keep firing on schedule.
    pub fn tick(&mut self) -> SimSnapshot {
        self.time.advance();
        self.run_scheduled_effects();

        if self.vehicle.is_flying {
            self.run_flight();
        }

        if let Some(ambient) = &mut self.ambient {
            ambient.run(&self.vehicle, self.time.tick, &mut self.events);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            &self.vehicle,
            self.ambient.as_ref().map(|a| a.view()),
            events,
        )
    }

    /// Motion, telemetry and battery drain for one flying tick.
    fn run_flight(&mut self) {
        match systems::motion::advance(&mut self.vehicle) {
            MotionStep::Idle => {}
            MotionStep::Moved {
                distance,
                to_target,
            } => {
                systems::telemetry::update_kinematics(&mut self.vehicle, distance, to_target);
                systems::telemetry::update_altitude(&mut self.vehicle);
                self.stats.record_move(STEP_SIZE, self.vehicle.altitude);
            }
            MotionStep::Arrived { index } => self.handle_arrival(index),
        }

        if self.vehicle.is_flying && systems::battery::drain(&mut self.vehicle.battery_level) {
            warn!("battery depleted");
            self.events.push(SimEvent::BatteryDepleted);
        }
    }

    fn handle_arrival(&mut self, index: usize) {
        let Some(waypoint) = self.vehicle.waypoints.get(index).cloned() else {
            return;
        };
        debug!(index, label = %waypoint.label, tag = ?waypoint.tag, "waypoint reached");
        self.stats.record_waypoint();
        self.events.push(SimEvent::WaypointReached {
            index,
            tag: waypoint.tag,
            label: waypoint.label,
        });

        let update = fsm::on_arrival(self.vehicle.mission_phase, waypoint.tag);
        self.set_phase(update.new_phase);
        if let Some(status) = update.status {
            self.vehicle.status = status;
        }

        match update.effect {
            Some(ArrivalEffect::ArmPayloadDrop) => {
                info!("delivery zone reached, payload drop armed");
                self.effects.schedule(
                    EffectKind::AutoDeploy,
                    self.time.tick,
                    AUTO_DEPLOY_GRACE_SECS,
                    self.mission_epoch,
                );
            }
            Some(ArrivalEffect::CompleteMission) => self.complete_mission(),
            None => {}
        }
    }

    fn complete_mission(&mut self) {
        self.vehicle.is_flying = false;
        self.vehicle.altitude = 0.0;
        self.vehicle.speed = 0.0;
        if let Some(mission_id) = self.vehicle.current_mission {
            self.events.push(SimEvent::MissionCompleted { mission_id });
        }
        self.effects.schedule(
            EffectKind::GenerateReport,
            self.time.tick,
            REPORT_DELAY_SECS,
            self.mission_epoch,
        );
        info!(
            distance = self.stats.distance_traveled,
            battery = self.vehicle.battery_level,
            "landing complete, mission successful"
        );
    }

    /// Fire due delayed effects, re-checking each precondition first.
    fn run_scheduled_effects(&mut self) {
        for effect in self.effects.take_due(self.time.tick) {
            if effect.epoch != self.mission_epoch {
                debug!(kind = ?effect.kind, "dropping effect from a previous mission");
                continue;
            }
            match effect.kind {
                EffectKind::AutoDeploy => {
                    if self.vehicle.mission_phase == MissionPhase::Delivery {
                        // Precondition just checked, so this cannot be rejected.
                        let _ = self.deploy(true);
                    } else {
                        debug!(phase = ?self.vehicle.mission_phase, "auto-deploy no longer needed");
                    }
                }
                EffectKind::GenerateReport => {
                    if self.vehicle.mission_phase == MissionPhase::Completed {
                        if let Some(report) = self.mission_report() {
                            info!(mission = %report.mission_name, "mission report ready");
                            self.events.push(SimEvent::ReportReady { report });
                        }
                    }
                }
            }
        }
    }

    fn deploy(&mut self, automatic: bool) -> Result<(), PreconditionError> {
        fsm::check_deploy(&self.vehicle)?;
        let weight_kg = self.vehicle.payload.weight_kg;
        self.vehicle.payload.weight_kg = 0.0;
        self.vehicle.payload.delivered = true;
        // The delivery arrival already moved past the drop zone, so this
        // also skips the return waypoint and heads straight for landing.
        self.vehicle.current_waypoint_index =
            (self.vehicle.current_waypoint_index + 1).min(self.vehicle.waypoints.len());
        self.set_phase(MissionPhase::Return);
        self.vehicle.status = MissionStatus::PayloadDelivered;
        self.events.push(SimEvent::PayloadDeployed {
            weight_kg,
            automatic,
        });
        info!(weight_kg, automatic, "medical supplies delivered");
        Ok(())
    }

    /// Change phase, emitting `PhaseChanged` only on an actual change.
    fn set_phase(&mut self, to: MissionPhase) {
        let from = self.vehicle.mission_phase;
        if from != to {
            self.vehicle.mission_phase = to;
            self.events.push(SimEvent::PhaseChanged { from, to });
        }
    }

    fn summary(&self, scenario: &MissionScenario, target: Position) -> MissionSummary {
        let weather = catalog::weather_condition(scenario.weather);
        MissionSummary {
            id: scenario.id,
            name: scenario.name.to_string(),
            description: scenario.description.to_string(),
            urgency: scenario.urgency,
            supplies: scenario
                .resolved_supplies()
                .map(|s| s.name.to_string())
                .collect(),
            payload_weight_kg: self.vehicle.payload.weight_kg,
            weather: scenario.weather,
            visibility_km: weather.visibility_km,
            wind_speed_kmh: weather.wind_speed_kmh,
            weather_impact: weather.impact.to_string(),
            threat_level: scenario.threat_level,
            location: scenario.location,
            target,
        }
    }
}
