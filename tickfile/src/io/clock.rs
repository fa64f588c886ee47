//! Time source for the countdown loop.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};

/// Wall-clock time and delay, injected so tests can script both.
///
/// `sleep` lives on the same trait as `now` on purpose: a scripted clock
/// advances its own notion of now when asked to sleep, which keeps loop
/// tests deterministic and instant.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
    fn sleep(&self, duration: Duration);
}

/// The real thing: `Local::now` and `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
