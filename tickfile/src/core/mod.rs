//! Pure countdown logic.
//!
//! Core modules are free of I/O side effects. Given a target instant and
//! a current instant they derive phases and rendered text
//! deterministically, so everything here is testable without a clock or
//! a filesystem.

pub mod phase;
pub mod render;
