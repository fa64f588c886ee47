//! Stdout output for countdown runs, gated by verbosity.
//!
//! This is the product-facing console surface. It never affects loop
//! behavior; the loop reports ticks through its callback and the console
//! decides what to show.

use std::path::Path;

use chrono::{DateTime, Local};
use clap::ValueEnum;

/// How much the CLI says on stdout. Levels are ordered, so gates read
/// as `>=` comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub enum Verbosity {
    /// Nothing at all.
    Quiet,
    /// The startup banner.
    #[default]
    Normal,
    /// The banner, every written update, and a completion line.
    Detailed,
}

/// Console writer for one countdown run.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Startup banner naming the target and the output file.
    pub fn banner(&self, target: DateTime<Local>, output_file: &Path) {
        if self.verbosity >= Verbosity::Normal {
            println!(
                "Running countdown to {} in '{}'",
                target.format("%Y-%m-%d %H:%M:%S"),
                output_file.display()
            );
        }
    }

    /// Echo text that just landed in the output file.
    pub fn echo(&self, text: &str) {
        if self.verbosity >= Verbosity::Detailed {
            println!("{text}");
        }
    }

    /// Completion line after the end message.
    pub fn complete(&self) {
        if self.verbosity >= Verbosity::Detailed {
            println!("Countdown complete.");
        }
    }
}
