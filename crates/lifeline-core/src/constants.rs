//! Simulation constants and tuning parameters.

/// Motion tick rate (Hz).
pub const TICK_RATE: u32 = 10;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Motion ---

/// Distance moved toward the active waypoint per tick.
/// Not scaled by DT: simulated speed follows the tick rate.
pub const STEP_SIZE: f64 = 1.5;

/// Distance at or below which a waypoint counts as reached.
pub const ARRIVAL_EPSILON: f64 = 3.0;

// --- Telemetry ---

/// Upper bound on displayed speed.
pub const SPEED_CAP: f64 = 45.0;

/// Speed per unit of remaining distance to the active waypoint.
pub const SPEED_SCALE: f64 = 0.8;

/// Altitude gained per tick during takeoff (meters).
pub const TAKEOFF_CLIMB_RATE: f64 = 0.8;

/// Altitude ceiling for the takeoff climb (meters).
pub const TAKEOFF_ALTITUDE_CAP: f64 = 100.0;

/// Altitude gained per tick while navigating (meters).
pub const CRUISE_CLIMB_RATE: f64 = 0.3;

/// Cruise altitude ceiling (meters).
pub const CRUISE_ALTITUDE_CAP: f64 = 150.0;

/// Altitude lost per tick over the delivery zone (meters).
pub const DELIVERY_DESCENT_RATE: f64 = 0.5;

/// Hover altitude floor for payload drop (meters).
pub const DELIVERY_ALTITUDE_FLOOR: f64 = 20.0;

// --- Battery ---

/// Initial battery charge (percent).
pub const DEFAULT_BATTERY_LEVEL: f64 = 98.0;

/// Battery percent consumed per flying tick.
pub const DRAIN_RATE: f64 = 0.0008;

// --- Scheduled effects ---

/// Grace window before the payload is dropped automatically (seconds).
pub const AUTO_DEPLOY_GRACE_SECS: f64 = 5.0;

/// Delay between landing and mission report generation (seconds).
pub const REPORT_DELAY_SECS: f64 = 3.0;

// --- Waypoint plan ---

/// Default launch/landing pad position.
pub const HOME_X: f64 = 50.0;
pub const HOME_Y: f64 = 280.0;

/// Takeoff point offset from the origin.
pub const TAKEOFF_OFFSET: (f64, f64) = (50.0, -50.0);

/// Return waypoint offset from the origin.
pub const RETURN_OFFSET: (f64, f64) = (100.0, -80.0);

/// Per-axis scale of the target for the first navigation waypoint.
pub const NAV_1_SCALE: (f64, f64) = (0.4, 0.8);

/// Per-axis scale of the target for the second navigation waypoint.
pub const NAV_2_SCALE: (f64, f64) = (0.7, 1.1);

/// Largest absolute coordinate accepted in a plan. Keeps every leg length
/// well inside f64 range so each step makes progress.
pub const MAX_COORDINATE: f64 = 1.0e6;

/// Number of waypoints in every mission plan.
pub const PLAN_LEN: usize = 6;

/// Delivery target draw ranges: `min + rand * span`.
pub const TARGET_X_MIN: f64 = 200.0;
pub const TARGET_X_SPAN: f64 = 300.0;
pub const TARGET_Y_MIN: f64 = 50.0;
pub const TARGET_Y_SPAN: f64 = 150.0;

// --- Payload ---

/// Default payload bay temperature (°C).
pub const PAYLOAD_DEFAULT_TEMP_C: f64 = 4.2;

/// Payload bay temperature for cold-chain supplies (°C).
pub const PAYLOAD_COLD_CHAIN_TEMP_C: f64 = 3.8;

/// Payload bay temperature bounds while flying (°C).
pub const PAYLOAD_TEMP_MIN_C: f64 = 2.0;
pub const PAYLOAD_TEMP_MAX_C: f64 = 6.0;

// --- Ambient telemetry (cosmetic) ---

/// Auxiliary telemetry refresh interval (seconds).
pub const AMBIENT_REFRESH_SECS: f64 = 2.0;

/// Obstacle scan interval while flying (seconds).
pub const OBSTACLE_SCAN_SECS: f64 = 15.0;

/// Probability of an obstacle event per scan.
pub const OBSTACLE_PROBABILITY: f64 = 0.3;

/// Nominal GPS satellite count.
pub const GPS_SATELLITES_NOMINAL: u32 = 12;

/// Nominal GPS accuracy (meters).
pub const GPS_ACCURACY_NOMINAL: f64 = 1.2;

/// Nominal link signal strength (percent).
pub const SIGNAL_STRENGTH_NOMINAL: i32 = 85;

/// Nominal link latency (milliseconds).
pub const LATENCY_NOMINAL_MS: i32 = 45;
