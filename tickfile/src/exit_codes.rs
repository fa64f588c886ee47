//! Stable exit codes for the tickfile CLI.

/// Countdown ran to completion and the end message write was attempted.
pub const OK: i32 = 0;
/// Invalid target time, interval, or defaults file, or another startup error.
pub const INVALID: i32 = 1;
/// The timer format failed to render mid-run; no end message was written.
pub const RENDER: i32 = 2;
