//! Core types and definitions for the LIFELINE delivery-drone simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! commands, vehicle state, snapshots, events, errors, the mission
//! catalog, and constants. It has no dependency on any runtime or driver.

pub mod catalog;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
