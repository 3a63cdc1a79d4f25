//! Simulation engine for LIFELINE.
//!
//! Owns the vehicle state, runs the motion, telemetry and battery systems
//! at a fixed tick rate, drives the mission phase machine, and produces
//! `SimSnapshot`s for a driver.

pub mod config;
pub mod engine;
pub mod fsm;
pub mod plan;
pub mod report;
pub mod schedule;
pub mod systems;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use lifeline_core as core;
