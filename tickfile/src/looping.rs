//! The countdown loop: render the remaining time, publish it, sleep,
//! repeat; once the target passes, publish the end message and stop.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::CountdownConfig;
use crate::core::phase::{Phase, current_phase};
use crate::core::render::Renderer;
use crate::io::clock::Clock;
use crate::io::sink::TextSink;

/// Disposition of one write attempt against the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAttempt {
    /// The text changed and the write succeeded.
    Written,
    /// The text matched the last successful write; no I/O was performed.
    Unchanged,
    /// The text changed but the write failed. The previous content is
    /// kept as the comparison point, so the next tick tries again.
    Failed,
}

/// One loop iteration, as seen by the `on_tick` callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub remaining: Duration,
    pub text: String,
    pub attempt: WriteAttempt,
}

/// Summary of a finished countdown run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownOutcome {
    pub ticks: u32,
    pub writes: u32,
    pub suppressed: u32,
    pub write_failures: u32,
    /// Whether the end message landed in the sink. A failure here is
    /// reported but does not fail the run.
    pub final_write_ok: bool,
}

/// Run the countdown until `config.target` passes, then write
/// `config.end_message`.
///
/// Each iteration renders the remaining time and hands it to
/// [`write_if_changed`]; `on_tick` observes every iteration, including
/// suppressed and failed ones. Transient write failures are logged and
/// absorbed. A render failure aborts immediately with the error, before
/// any sleep and without the end message.
pub fn run_countdown<C: Clock, R: Renderer, S: TextSink, F: FnMut(&Tick)>(
    clock: &C,
    renderer: &R,
    sink: &mut S,
    config: &CountdownConfig,
    mut on_tick: F,
) -> Result<CountdownOutcome> {
    config.validate()?;

    let mut last_written: Option<String> = None;
    let mut ticks = 0u32;
    let mut writes = 0u32;
    let mut suppressed = 0u32;
    let mut write_failures = 0u32;

    while let Phase::Counting(remaining) = current_phase(config.target, clock.now()) {
        let text = renderer.render(remaining).context("render remaining time")?;
        let attempt = write_if_changed(sink, &mut last_written, &text);
        match attempt {
            WriteAttempt::Written => writes += 1,
            WriteAttempt::Unchanged => suppressed += 1,
            WriteAttempt::Failed => write_failures += 1,
        }
        ticks += 1;
        on_tick(&Tick {
            remaining,
            text,
            attempt,
        });
        clock.sleep(config.poll_interval);
    }

    // The end message bypasses suppression: it must be the last content
    // regardless of what the loop wrote.
    let final_write_ok = match sink.write_all_text(&config.end_message) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "end message write failed");
            false
        }
    };

    debug!(ticks, writes, suppressed, write_failures, final_write_ok, "countdown finished");
    Ok(CountdownOutcome {
        ticks,
        writes,
        suppressed,
        write_failures,
        final_write_ok,
    })
}

/// Write `text` to the sink unless it equals the last successfully
/// written content.
///
/// On failure the error is logged and swallowed and `last` is left
/// untouched; since the failed text still differs from `last`, the next
/// tick retries instead of silently going stale.
pub fn write_if_changed<S: TextSink>(
    sink: &mut S,
    last: &mut Option<String>,
    text: &str,
) -> WriteAttempt {
    if last.as_deref() == Some(text) {
        return WriteAttempt::Unchanged;
    }
    match sink.write_all_text(text) {
        Ok(()) => {
            *last = Some(text.to_string());
            WriteAttempt::Written
        }
        Err(err) => {
            warn!(error = %err, "countdown write failed, will retry next tick");
            WriteAttempt::Failed
        }
    }
}
