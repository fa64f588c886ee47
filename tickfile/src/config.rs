//! Countdown run configuration.

use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, TimeZone};

/// Delay between loop iterations when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Final file content when none is configured.
pub const DEFAULT_END_MESSAGE: &str = "Starting soon";

/// Everything the countdown loop itself consumes.
///
/// The render pattern and the output path are deliberately not in here:
/// they belong to the renderer and the sink the caller passes alongside
/// this config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfig {
    /// Instant the countdown runs toward.
    pub target: DateTime<Local>,
    /// Delay between iterations. Must be greater than zero.
    pub poll_interval: Duration,
    /// Written unconditionally once the target has passed.
    pub end_message: String,
}

impl CountdownConfig {
    pub fn new(target: DateTime<Local>) -> Self {
        Self {
            target,
            poll_interval: DEFAULT_POLL_INTERVAL,
            end_message: DEFAULT_END_MESSAGE.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval.is_zero() {
            bail!("poll interval must be greater than zero");
        }
        Ok(())
    }
}

/// Parse a target time given on the command line.
///
/// Accepted forms, tried in order:
///
/// - RFC 3339 with an offset (`2026-08-25T20:00:00+02:00`, `...Z`),
///   converted to local time;
/// - a naive local date-time: `2026-08-25T20:00:00`,
///   `2026-08-25 20:00:00`, or `2026-08-25 20:00`;
/// - a time of day (`20:00:00` or `20:00`), taken on `now`'s date. A
///   time already gone today stays on today, so the countdown ends
///   immediately rather than waiting for tomorrow.
///
/// A naive form that falls into a DST gap is an error; an ambiguous one
/// resolves to the earlier instant.
pub fn parse_target_time(input: &str, now: DateTime<Local>) -> Result<DateTime<Local>> {
    let input = input.trim();
    if let Ok(fixed) = DateTime::parse_from_rfc3339(input) {
        return Ok(fixed.with_timezone(&Local));
    }
    const DATE_TIME_FORMATS: [&str; 3] =
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return local_from_naive(naive);
        }
    }
    const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(input, format) {
            return local_from_naive(now.date_naive().and_time(time));
        }
    }
    Err(anyhow!(
        "'{input}' is not a recognized target time (try 2026-08-25T20:00:00 or 20:00)"
    ))
}

fn local_from_naive(naive: NaiveDateTime) -> Result<DateTime<Local>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(target) => Ok(target),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(anyhow!("{naive} does not exist in the local timezone")),
    }
}
