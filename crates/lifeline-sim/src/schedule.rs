//! Delayed effects (auto-deploy, report generation).
//!
//! Effects are records with a fire tick and the mission epoch they were
//! scheduled in. They are never cancelled; the engine re-checks the
//! precondition when an effect comes due and drops it if stale.

use serde::{Deserialize, Serialize};

use lifeline_core::types::secs_to_ticks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Drop the payload if the operator has not done so.
    AutoDeploy,
    /// Produce the mission outcome report.
    GenerateReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    pub kind: EffectKind,
    /// Tick at which this effect fires.
    pub fire_at_tick: u64,
    /// Mission epoch at scheduling time.
    pub epoch: u32,
}

/// Pending effects, in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct EffectSchedule {
    effects: Vec<ScheduledEffect>,
}

impl EffectSchedule {
    /// Schedule `kind` to fire `delay_secs` after `now_tick`.
    pub fn schedule(&mut self, kind: EffectKind, now_tick: u64, delay_secs: f64, epoch: u32) {
        self.effects.push(ScheduledEffect {
            kind,
            fire_at_tick: now_tick + secs_to_ticks(delay_secs),
            epoch,
        });
    }

    /// Remove and return every effect due at or before `tick`, earliest first.
    pub fn take_due(&mut self, tick: u64) -> Vec<ScheduledEffect> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.effects)
            .into_iter()
            .partition(|e| e.fire_at_tick <= tick);
        self.effects = pending;
        due.sort_by_key(|e| e.fire_at_tick);
        due
    }

    pub fn pending(&self) -> &[ScheduledEffect] {
        &self.effects
    }

    /// Number of pending effects of one kind.
    pub fn count(&self, kind: EffectKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }
}
