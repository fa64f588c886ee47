//! Rendering of a remaining duration into countdown text.
//!
//! Patterns use percent specifiers, e.g. `"%M:%S"` (the default) renders
//! `09:05` for nine minutes five seconds. Sub-second remainders are
//! floored away so the text only changes on whole-second boundaries.
//!
//! | Specifier | Meaning                              |
//! |-----------|--------------------------------------|
//! | `%d`      | whole days, no padding               |
//! | `%H`      | hours within the day, `00`..`23`     |
//! | `%M`      | minutes within the hour, `00`..`59`  |
//! | `%S`      | seconds within the minute, `00`..`59`|
//! | `%s`      | total whole seconds, no padding      |
//! | `%%`      | a literal `%`                        |
//!
//! Any other specifier is a [`RenderError`]. The pattern is applied per
//! call, so a bad pattern surfaces on the first render rather than at
//! construction.

use std::fmt;
use std::time::Duration;

/// Pattern used when the caller does not supply one.
pub const DEFAULT_PATTERN: &str = "%M:%S";

/// Turns a remaining duration into the text to publish.
pub trait Renderer {
    fn render(&self, remaining: Duration) -> Result<String, RenderError>;
}

/// A percent-specifier render pattern. See the module docs for the
/// specifier table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFormat {
    pattern: String,
}

impl TimerFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for TimerFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

/// Pattern failure raised while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// `%` followed by a character that is not a known specifier.
    UnknownSpecifier(char),
    /// The pattern ends with a bare `%`.
    TruncatedPattern,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownSpecifier(ch) => {
                write!(f, "'%{ch}' is not a valid timer format specifier")
            }
            RenderError::TruncatedPattern => {
                write!(f, "timer format ends with a bare '%'")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl Renderer for TimerFormat {
    fn render(&self, remaining: Duration) -> Result<String, RenderError> {
        let parts = TimeParts::of(remaining);
        let mut out = String::with_capacity(self.pattern.len() + 4);
        let mut chars = self.pattern.chars();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('d') => out.push_str(&parts.days.to_string()),
                Some('H') => out.push_str(&format!("{:02}", parts.hours)),
                Some('M') => out.push_str(&format!("{:02}", parts.minutes)),
                Some('S') => out.push_str(&format!("{:02}", parts.seconds)),
                Some('s') => out.push_str(&parts.total_seconds.to_string()),
                Some('%') => out.push('%'),
                Some(other) => return Err(RenderError::UnknownSpecifier(other)),
                None => return Err(RenderError::TruncatedPattern),
            }
        }
        Ok(out)
    }
}

/// Clock-style decomposition of a duration, floored to whole seconds.
struct TimeParts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    total_seconds: u64,
}

impl TimeParts {
    fn of(duration: Duration) -> Self {
        let total_seconds = duration.as_secs();
        Self {
            days: total_seconds / 86_400,
            hours: total_seconds / 3_600 % 24,
            minutes: total_seconds / 60 % 60,
            seconds: total_seconds % 60,
            total_seconds,
        }
    }
}
