//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_dashclock(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_dashclock");
    Command::new(bin)
        .args(args)
        .env_remove("DASHCLOCK_ELEMENT")
        .env_remove("DASHCLOCK_PERIOD_MS")
        .output()
        .expect("failed to run dashclock binary")
}

fn scratch(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn once_prints_label_for_given_instant() {
    let output = run_dashclock(&["once", "--at", "2024-03-05T14:07:09.483Z"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim_end(), "Current Date and Time: 2024-03-05 14:07:09");
}

#[test]
fn once_rejects_malformed_instant() {
    let output = run_dashclock(&["once", "--at", "yesterday"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--at"));
}

#[test]
fn run_help_shows_surface_options() {
    let output = run_dashclock(&["run", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--surface"));
    assert!(stdout.contains("--period-ms"));
}

#[test]
fn run_on_terminal_rewrites_one_line() {
    let output = run_dashclock(&["run", "--ticks", "2", "--period-ms", "20"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.matches("\r\x1b[2KCurrent Date and Time: ").count(), 2);
    assert!(stdout.ends_with('\n'));
}

#[test]
fn run_with_missing_element_keeps_ticking_and_succeeds() {
    let dir = scratch("dashclock_cli_missing_element");
    let root = dir.to_str().unwrap();

    let output = run_dashclock(&[
        "run", "--surface", "directory", "--root", root, "--ticks", "3", "--period-ms", "10",
    ]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick failed"));
    assert!(!dir.join("currentDateTime").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn element_can_come_from_environment() {
    let dir = scratch("dashclock_cli_env_element");
    std::fs::write(dir.join("clock"), "").unwrap();
    let bin = env!("CARGO_BIN_EXE_dashclock");

    let output = Command::new(bin)
        .args(["run", "--surface", "directory", "--ticks", "1", "--root"])
        .arg(&dir)
        .env("DASHCLOCK_ELEMENT", "clock")
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = std::fs::read_to_string(dir.join("clock")).unwrap();
    assert!(text.starts_with("Current Date and Time: "));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_dashclock(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
