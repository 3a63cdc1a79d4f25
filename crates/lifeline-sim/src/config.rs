//! Engine configuration.

use serde::{Deserialize, Serialize};

use lifeline_core::constants::{DEFAULT_BATTERY_LEVEL, HOME_X, HOME_Y, MAX_COORDINATE};
use lifeline_core::error::ConfigurationError;
use lifeline_core::types::Position;

/// Salt mixed into the seed for the cosmetic telemetry stream, so that
/// toggling ambient telemetry never perturbs the core RNG.
pub(crate) const AMBIENT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a new simulation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same delivery zones.
    pub seed: u64,
    /// Launch and landing pad. Also the origin of every mission plan.
    pub home: Position,
    /// Battery charge at engine start (percent).
    pub initial_battery: f64,
    /// Simulate cosmetic GPS/link jitter and obstacle contacts.
    pub ambient_telemetry: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            home: Position::new(HOME_X, HOME_Y),
            initial_battery: DEFAULT_BATTERY_LEVEL,
            ambient_telemetry: true,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ConfigurationError::check_in_range("home", &self.home, MAX_COORDINATE)?;
        if !(0.0..=100.0).contains(&self.initial_battery) {
            return Err(ConfigurationError::BatteryOutOfRange(self.initial_battery));
        }
        Ok(())
    }
}
