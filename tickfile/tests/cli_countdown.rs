//! CLI tests for the tickfile binary.
//!
//! Spawns the binary and verifies exit codes, final file content, and
//! cleanup behavior. Targets in the past make most runs finish
//! immediately; the few real countdowns use a ~2s target with a short
//! interval and a kill timeout so a regression cannot hang the suite.

use std::fs;
use std::process::{Child, Command, ExitStatus};
use std::time::Duration;

use chrono::{Local, TimeDelta};
use wait_timeout::ChildExt;

use tickfile::exit_codes;

/// A target that has long passed, for runs that should complete at once.
const PAST_TARGET: &str = "2020-01-01T00:00:00";

/// US Eastern rules as a POSIX TZ string, so the DST tests work without
/// a timezone database on the host.
const EASTERN_TZ: &str = "EST5EDT,M3.2.0/2,M11.1.0/2";

const WAIT_LIMIT: Duration = Duration::from_secs(30);

fn tickfile() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tickfile"))
}

/// Naive local timestamp at least `seconds - 1` seconds ahead of now
/// (formatting floors the sub-second part).
fn future_target(seconds: i64) -> String {
    (Local::now() + TimeDelta::seconds(seconds))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

fn wait_or_kill(mut child: Child) -> ExitStatus {
    match child.wait_timeout(WAIT_LIMIT).expect("wait for tickfile") {
        Some(status) => status,
        None => {
            child.kill().expect("kill stuck tickfile");
            child.wait().expect("reap stuck tickfile");
            panic!("tickfile did not exit within {WAIT_LIMIT:?}");
        }
    }
}

#[test]
fn past_target_writes_end_message_and_keeps_file_when_asked() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let status = tickfile()
        .args(["--countdown-to", PAST_TARGET, "--keep-file"])
        .arg("--output-file")
        .arg(&out)
        .status()
        .expect("run tickfile");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "Starting soon");
}

#[test]
fn past_target_removes_file_by_default() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let status = tickfile()
        .args(["--countdown-to", PAST_TARGET])
        .arg("--output-file")
        .arg(&out)
        .status()
        .expect("run tickfile");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(!out.exists());
}

#[test]
fn default_output_file_lands_in_the_working_directory() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = tickfile()
        .current_dir(temp.path())
        .args(["--countdown-to", PAST_TARGET, "--keep-file"])
        .status()
        .expect("run tickfile");

    assert_eq!(status.code(), Some(exit_codes::OK));
    let out = temp.path().join("output.txt");
    assert_eq!(fs::read_to_string(&out).expect("read output"), "Starting soon");
}

#[test]
fn custom_end_message_is_the_final_content() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let status = tickfile()
        .args(["--countdown-to", PAST_TARGET, "--keep-file"])
        .args(["--end-message", "Live now"])
        .arg("--output-file")
        .arg(&out)
        .status()
        .expect("run tickfile");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "Live now");
}

#[test]
fn short_countdown_loops_then_completes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let child = tickfile()
        .arg("--countdown-to")
        .arg(future_target(2))
        .args(["--interval-ms", "100", "--keep-file"])
        .arg("--output-file")
        .arg(&out)
        .spawn()
        .expect("spawn tickfile");
    let status = wait_or_kill(child);

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "Starting soon");
}

#[test]
fn broken_timer_format_exits_with_render_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    // The pattern fails on the first tick, so the future target never delays the run.
    let child = tickfile()
        .arg("--countdown-to")
        .arg(future_target(5))
        .args(["--timer-format", "%q"])
        .arg("--output-file")
        .arg(&out)
        .spawn()
        .expect("spawn tickfile");
    let status = wait_or_kill(child);

    assert_eq!(status.code(), Some(exit_codes::RENDER));
    assert!(!out.exists());
}

#[test]
fn unparseable_target_time_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let output = tickfile()
        .args(["--countdown-to", "soonish"])
        .arg("--output-file")
        .arg(&out)
        .output()
        .expect("run tickfile");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(!out.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a recognized target time"));
}

#[test]
fn dst_gap_target_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    // 2:30 on the 2026 spring-forward day never occurs under Eastern
    // rules: clocks jump from 2:00 to 3:00.
    let output = tickfile()
        .env("TZ", EASTERN_TZ)
        .args(["--countdown-to", "2026-03-08T02:30:00"])
        .arg("--output-file")
        .arg(&out)
        .output()
        .expect("run tickfile");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(!out.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist in the local timezone"));
}

#[test]
fn ambiguous_fall_back_target_parses_and_completes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    // 1:30 on the 2020 fall-back day occurs twice; the earlier instant
    // is taken, and both are long past.
    let status = tickfile()
        .env("TZ", EASTERN_TZ)
        .args(["--countdown-to", "2020-11-01T01:30:00", "--keep-file"])
        .arg("--output-file")
        .arg(&out)
        .status()
        .expect("run tickfile");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "Starting soon");
}

#[test]
fn zero_interval_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let status = tickfile()
        .args(["--countdown-to", PAST_TARGET, "--interval-ms", "0"])
        .arg("--output-file")
        .arg(&out)
        .status()
        .expect("run tickfile");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
    assert!(!out.exists());
}

#[test]
fn missing_defaults_file_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = tickfile()
        .args(["--countdown-to", PAST_TARGET])
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .output()
        .expect("run tickfile");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("read defaults file"));
}

#[test]
fn defaults_file_applies_and_explicit_flags_win() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("tickfile.toml");
    fs::write(&config, "end_message = \"From config\"\nkeep_file = true\n").expect("write config");
    let out = temp.path().join("out.txt");

    let status = tickfile()
        .args(["--countdown-to", PAST_TARGET])
        .arg("--output-file")
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .status()
        .expect("run tickfile");
    assert_eq!(status.code(), Some(exit_codes::OK));
    // keep_file came from the defaults file, end_message too.
    assert_eq!(fs::read_to_string(&out).expect("read output"), "From config");

    let status = tickfile()
        .args(["--countdown-to", PAST_TARGET])
        .args(["--end-message", "CLI wins"])
        .arg("--output-file")
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .status()
        .expect("run tickfile");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "CLI wins");
}

#[test]
fn banner_prints_at_normal_and_not_at_quiet() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let output = tickfile()
        .args(["--countdown-to", PAST_TARGET])
        .arg("--output-file")
        .arg(&out)
        .output()
        .expect("run tickfile");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Running countdown to"));

    let output = tickfile()
        .args(["--countdown-to", PAST_TARGET, "--verbosity", "quiet"])
        .arg("--output-file")
        .arg(&out)
        .output()
        .expect("run tickfile");
    assert!(output.stdout.is_empty());
}

#[test]
fn detailed_verbosity_echoes_the_end_message() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");

    let output = tickfile()
        .args(["--countdown-to", PAST_TARGET, "-v", "detailed"])
        .arg("--output-file")
        .arg(&out)
        .output()
        .expect("run tickfile");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Starting soon"));
    assert!(stdout.contains("Countdown complete."));
}
