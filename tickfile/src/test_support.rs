//! Test-only scripted collaborators for countdown runs.

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

use crate::core::render::{RenderError, Renderer};
use crate::io::clock::Clock;
use crate::io::sink::TextSink;

/// Deterministic clock. `now` starts at a fixed instant and advances
/// only when the loop sleeps, so scripted runs finish instantly.
pub struct ScriptedClock {
    now: RefCell<DateTime<Local>>,
    slept: RefCell<Vec<Duration>>,
}

impl ScriptedClock {
    pub fn starting_at(start: DateTime<Local>) -> Self {
        Self {
            now: RefCell::new(start),
            slept: RefCell::new(Vec::new()),
        }
    }

    /// Sleep durations requested so far, in order.
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.borrow()
    }

    fn sleep(&self, duration: Duration) {
        let delta = TimeDelta::from_std(duration).expect("sleep duration fits a TimeDelta");
        let advanced = *self.now.borrow() + delta;
        *self.now.borrow_mut() = advanced;
        self.slept.borrow_mut().push(duration);
    }
}

/// Sink that records successful writes in memory and can be scripted to
/// fail the next N attempts.
pub struct ScriptedSink {
    pub writes: Vec<String>,
    failures_remaining: u32,
}

impl ScriptedSink {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            failures_remaining: 0,
        }
    }

    /// Fail the next `failures` write attempts, then succeed again.
    pub fn failing_next(failures: u32) -> Self {
        Self {
            writes: Vec::new(),
            failures_remaining: failures,
        }
    }

    /// The most recent successful write, if any.
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Default for ScriptedSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for ScriptedSink {
    fn write_all_text(&mut self, contents: &str) -> io::Result<()> {
        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return Err(io::Error::other("scripted write failure"));
        }
        self.writes.push(contents.to_string());
        Ok(())
    }
}

/// Renderer that returns the same text for every remaining duration.
pub struct FixedRenderer(pub String);

impl Renderer for FixedRenderer {
    fn render(&self, _remaining: Duration) -> Result<String, RenderError> {
        Ok(self.0.clone())
    }
}

/// Renderer that fails every call, as a broken pattern would.
pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _remaining: Duration) -> Result<String, RenderError> {
        Err(RenderError::UnknownSpecifier('q'))
    }
}
