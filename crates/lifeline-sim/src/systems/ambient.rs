//! Cosmetic telemetry: GPS/link jitter, payload temperature drift, and
//! random obstacle contacts.
//!
//! Runs on its own RNG stream and only reads the vehicle, so turning it off
//! (or reseeding it) cannot change mission behavior.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use lifeline_core::constants::*;
use lifeline_core::events::SimEvent;
use lifeline_core::state::{AmbientView, VehicleState};
use lifeline_core::types::secs_to_ticks;

/// Half-extent of the square around the vehicle where obstacles appear.
const OBSTACLE_SPREAD: f64 = 30.0;

pub struct AmbientTelemetry {
    rng: ChaCha8Rng,
    view: AmbientView,
    refresh_ticks: u64,
    scan_ticks: u64,
}

impl AmbientTelemetry {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            view: AmbientView {
                gps_satellites: GPS_SATELLITES_NOMINAL,
                gps_accuracy_m: GPS_ACCURACY_NOMINAL,
                signal_strength: SIGNAL_STRENGTH_NOMINAL,
                latency_ms: LATENCY_NOMINAL_MS,
                payload_temperature_c: PAYLOAD_DEFAULT_TEMP_C,
            },
            refresh_ticks: secs_to_ticks(AMBIENT_REFRESH_SECS),
            scan_ticks: secs_to_ticks(OBSTACLE_SCAN_SECS),
        }
    }

    pub fn view(&self) -> &AmbientView {
        &self.view
    }

    /// Reset the payload bay reading for a freshly loaded payload.
    pub fn load_payload(&mut self, cold_chain: bool) {
        self.view.payload_temperature_c = if cold_chain {
            PAYLOAD_COLD_CHAIN_TEMP_C
        } else {
            PAYLOAD_DEFAULT_TEMP_C
        };
    }

    pub fn run(&mut self, vehicle: &VehicleState, tick: u64, events: &mut Vec<SimEvent>) {
        if tick % self.refresh_ticks == 0 {
            self.refresh(vehicle);
        }
        if vehicle.is_flying && tick % self.scan_ticks == 0 {
            self.scan_obstacles(vehicle, events);
        }
    }

    fn refresh(&mut self, vehicle: &VehicleState) {
        let rng = &mut self.rng;
        self.view.gps_satellites = GPS_SATELLITES_NOMINAL + rng.gen_range(0..3) - 1;
        self.view.gps_accuracy_m = GPS_ACCURACY_NOMINAL + (rng.gen::<f64>() - 0.5) * 0.4;
        self.view.signal_strength = SIGNAL_STRENGTH_NOMINAL + rng.gen_range(-5..5);
        self.view.latency_ms = LATENCY_NOMINAL_MS + rng.gen_range(-10..10);

        if vehicle.is_flying {
            let drift = (rng.gen::<f64>() - 0.5) * 0.1;
            self.view.payload_temperature_c = (self.view.payload_temperature_c + drift)
                .clamp(PAYLOAD_TEMP_MIN_C, PAYLOAD_TEMP_MAX_C);
        }
    }

    fn scan_obstacles(&mut self, vehicle: &VehicleState, events: &mut Vec<SimEvent>) {
        if !self.rng.gen_bool(OBSTACLE_PROBABILITY) {
            return;
        }
        let position = vehicle.position.offset(
            self.rng.gen_range(-OBSTACLE_SPREAD..OBSTACLE_SPREAD),
            self.rng.gen_range(-OBSTACLE_SPREAD..OBSTACLE_SPREAD),
        );
        tracing::debug!(x = position.x, y = position.y, "obstacle detected by lidar");
        events.push(SimEvent::ObstacleDetected { position });
    }
}
