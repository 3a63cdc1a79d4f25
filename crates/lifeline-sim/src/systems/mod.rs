//! Per-tick systems that operate on the vehicle state.
//!
//! Systems are plain functions over `&mut VehicleState` (or `&VehicleState`
//! for read-only ones). They do not own state, apart from the cosmetic
//! ambient telemetry generator which keeps its own RNG.

pub mod ambient;
pub mod battery;
pub mod motion;
pub mod snapshot;
pub mod telemetry;
