//! Countdown timer that mirrors the remaining time into a text file.
//!
//! Given a target instant, tickfile repeatedly renders the remaining
//! time and overwrites a single output file with it, skipping writes
//! whose text has not changed; once the target passes it writes a final
//! end message. Downstream consumers (a streaming overlay, a status
//! panel) just read the file. The architecture enforces a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (phase derivation, duration
//!   rendering). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting collaborators (wall clock, file sink,
//!   defaults file). Behind traits to enable scripting in tests.
//!
//! [`looping`] coordinates core logic with the collaborators to run a
//! countdown; `main.rs` adds CLI parsing and [`console`] output.

pub mod config;
pub mod console;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod looping;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
