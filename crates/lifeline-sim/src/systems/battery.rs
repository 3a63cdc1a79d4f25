//! Battery drain while flying.

use lifeline_core::constants::DRAIN_RATE;

/// Drain one tick's worth of charge, floored at zero.
/// Returns true only on the tick the battery reaches zero.
pub fn drain(level: &mut f64) -> bool {
    if *level <= 0.0 {
        return false;
    }
    *level = (*level - DRAIN_RATE).max(0.0);
    *level == 0.0
}
