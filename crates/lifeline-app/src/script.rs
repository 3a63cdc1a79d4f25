//! Scripted operator commands for unattended runs.
//!
//! Each entry is written `TICK:ACTION`, e.g. `120:pause` or `300:return`.

use std::str::FromStr;

use lifeline_core::commands::VehicleCommand;

/// An operator command to issue once the sim reaches `at_tick`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedCommand {
    pub at_tick: u64,
    pub command: VehicleCommand,
}

impl FromStr for ScriptedCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tick, action) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid TICK:ACTION entry: {s}"))?;
        let at_tick = tick
            .trim()
            .parse()
            .map_err(|_| format!("Invalid tick in {s}"))?;
        let command = match action.trim().to_ascii_lowercase().as_str() {
            "pause" => VehicleCommand::Pause,
            "resume" => VehicleCommand::Resume,
            "emergency" => VehicleCommand::EmergencyLanding,
            "return" | "rth" => VehicleCommand::ReturnToHome,
            "deploy" => VehicleCommand::DeployPayload,
            other => return Err(format!("Unknown action: {other}")),
        };
        Ok(Self { at_tick, command })
    }
}

/// Sort a script by tick, keeping the given order for equal ticks.
pub fn ordered(mut script: Vec<ScriptedCommand>) -> Vec<ScriptedCommand> {
    script.sort_by_key(|c| c.at_tick);
    script
}
