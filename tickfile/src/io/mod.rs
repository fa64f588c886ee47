//! Side-effecting collaborators: wall clock, output file, defaults file.
//!
//! Everything the countdown loop touches in the environment goes through
//! a trait defined here, so tests can substitute scripted doubles.

pub mod clock;
pub mod defaults;
pub mod sink;
