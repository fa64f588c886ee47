//! Optional TOML defaults file.
//!
//! `--config <path>` points at a TOML file whose values replace the
//! built-in defaults; explicit CLI flags still win over both. A key left
//! out of the file keeps its built-in value.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::config::{DEFAULT_END_MESSAGE, DEFAULT_POLL_INTERVAL};
use crate::core::render::DEFAULT_PATTERN;

/// Output path used when neither the CLI nor a defaults file names one.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Defaults loadable from a TOML file, e.g.:
///
/// ```toml
/// output_file = "overlay/countdown.txt"
/// end_message = "Live now"
/// timer_format = "%H:%M:%S"
/// interval_ms = 500
/// keep_file = true
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerDefaults {
    pub output_file: String,
    pub end_message: String,
    pub timer_format: String,
    pub interval_ms: u64,
    pub keep_file: bool,
}

impl Default for TimerDefaults {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            end_message: DEFAULT_END_MESSAGE.to_string(),
            timer_format: DEFAULT_PATTERN.to_string(),
            interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            keep_file: false,
        }
    }
}

impl TimerDefaults {
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            bail!("interval_ms must be at least 1");
        }
        if self.output_file.trim().is_empty() {
            bail!("output_file must not be empty");
        }
        Ok(())
    }
}

/// Load and validate a defaults file. The path was given explicitly, so
/// a missing file is an error rather than a silent fallback.
pub fn load_defaults(path: &Path) -> Result<TimerDefaults> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read defaults file {}", path.display()))?;
    let defaults: TimerDefaults =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    defaults.validate()?;
    Ok(defaults)
}
