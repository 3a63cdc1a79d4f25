//! State shared between the operator side and the mission loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use lifeline_core::commands::VehicleCommand;
use lifeline_core::state::SimSnapshot;

/// Commands sent from the operator side to the mission loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the simulation engine.
    Vehicle(VehicleCommand),
    /// Shut down the mission loop thread gracefully.
    Shutdown,
}

/// Handles held by the operator side while the loop thread runs.
pub struct DriverState {
    /// Channel sender to forward commands to the loop thread.
    pub command_tx: mpsc::Sender<LoopCommand>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
}

impl DriverState {
    /// Tick of the latest published snapshot, or 0 before the first tick.
    pub fn latest_tick(&self) -> u64 {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.as_ref().map(|s| s.time.tick))
            .unwrap_or(0)
    }

    /// Forward an operator command. Returns false once the loop has exited.
    pub fn send(&self, command: VehicleCommand) -> bool {
        self.command_tx.send(LoopCommand::Vehicle(command)).is_ok()
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
    }
}
