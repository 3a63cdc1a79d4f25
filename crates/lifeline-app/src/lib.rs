//! LIFELINE headless mission driver.
//!
//! Wires the simulation engine to a fixed-rate loop thread, an operator
//! command channel, and a snapshot sink (console or JSON lines).

pub mod game_loop;
pub mod script;
pub mod sink;
pub mod state;

pub use lifeline_core as core;
