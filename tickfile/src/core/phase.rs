//! Phase derivation: where a countdown stands at a given instant.

use std::time::Duration;

use chrono::{DateTime, Local};

/// Position of a countdown relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The target is still ahead; carries the remaining duration.
    Counting(Duration),
    /// The target instant has been reached or passed.
    Reached,
}

/// Derive the phase at `now`.
///
/// The countdown counts only while `target > now` strictly; at
/// `target == now` the phase is already [`Phase::Reached`], so a
/// remaining duration of zero never escapes this function.
pub fn current_phase(target: DateTime<Local>, now: DateTime<Local>) -> Phase {
    match target.signed_duration_since(now).to_std() {
        Ok(remaining) if !remaining.is_zero() => Phase::Counting(remaining),
        _ => Phase::Reached,
    }
}
