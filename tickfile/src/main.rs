//! Countdown timer that mirrors the remaining time into a text file.
//!
//! `tickfile --countdown-to 20:00` writes `%M:%S`-style text into
//! `output.txt` every 250ms until 20:00 passes, then writes
//! "Starting soon" and exits. Meant for tools that can only read a
//! file, e.g. a streaming overlay.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use tickfile::config::{CountdownConfig, parse_target_time};
use tickfile::console::{Console, Verbosity};
use tickfile::core::render::{RenderError, TimerFormat};
use tickfile::exit_codes;
use tickfile::io::clock::{Clock, SystemClock};
use tickfile::io::defaults::{TimerDefaults, load_defaults};
use tickfile::io::sink::FileSink;
use tickfile::logging;
use tickfile::looping::{WriteAttempt, run_countdown};

#[derive(Parser)]
#[command(
    name = "tickfile",
    version,
    about = "Countdown timer that mirrors the remaining time into a text file"
)]
struct Cli {
    /// Target time, e.g. `2026-08-25T20:00:00` or `20:00` (today).
    #[arg(long, value_name = "TIME")]
    countdown_to: String,

    /// File the countdown is written into [default: output.txt].
    #[arg(long, value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Final file content once the countdown ends [default: Starting soon].
    #[arg(long, value_name = "TEXT")]
    end_message: Option<String>,

    /// Render pattern for the remaining time [default: %M:%S].
    #[arg(long, value_name = "PATTERN")]
    timer_format: Option<String>,

    /// Delay between updates in milliseconds [default: 250].
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Keep the output file instead of deleting it on exit.
    #[arg(long)]
    keep_file: bool,

    /// TOML defaults file; explicit flags still win over its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// How much to print on stdout.
    #[arg(short, long, value_enum, default_value_t = Verbosity::Normal)]
    verbosity: Verbosity,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        let code = if err.downcast_ref::<RenderError>().is_some() {
            exit_codes::RENDER
        } else {
            exit_codes::INVALID
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let defaults = match &cli.config {
        Some(path) => load_defaults(path)?,
        None => TimerDefaults::default(),
    };

    let output_file = cli
        .output_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&defaults.output_file));
    let end_message = cli.end_message.clone().unwrap_or_else(|| defaults.end_message.clone());
    let timer_format = cli.timer_format.clone().unwrap_or_else(|| defaults.timer_format.clone());
    let interval_ms = cli.interval_ms.unwrap_or(defaults.interval_ms);
    let keep_file = cli.keep_file || defaults.keep_file;

    let clock = SystemClock;
    let target =
        parse_target_time(&cli.countdown_to, clock.now()).context("parse --countdown-to")?;

    let mut config = CountdownConfig::new(target);
    config.poll_interval = Duration::from_millis(interval_ms);
    config.end_message = end_message;

    let console = Console::new(cli.verbosity);
    console.banner(target, &display_path(&output_file));

    let renderer = TimerFormat::new(timer_format);
    let mut sink = FileSink::new(&output_file);
    let outcome = run_countdown(&clock, &renderer, &mut sink, &config, |tick| {
        if tick.attempt == WriteAttempt::Written {
            console.echo(&tick.text);
        }
    })?;

    if outcome.final_write_ok {
        console.echo(&config.end_message);
    }
    console.complete();

    if !keep_file {
        // Transient runs should not leave output.txt behind. Failure here
        // is not worth a non-zero exit; the countdown itself succeeded.
        if let Err(err) = sink.remove() {
            debug!(error = %err, path = %sink.path().display(), "output file cleanup failed");
        }
    }

    debug!(
        ticks = outcome.ticks,
        writes = outcome.writes,
        suppressed = outcome.suppressed,
        write_failures = outcome.write_failures,
        "run complete"
    );
    Ok(())
}

/// Absolute form of `path` for the banner, so the user can find the file
/// regardless of the working directory.
fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
