//! Record-replay round trip through the binary and the library.
//!
//! 1. Run the clock with `--record`, writing a cassette.
//! 2. Replay it with `--verify`, which recomputes every label from the
//!    recorded clock readings and compares it with the recorded page write.
//! 3. Replay again through the library and check determinism.

use std::process::Command;

use dashclock::cassette::format::Cassette;
use dashclock::commands::replay::replay;

fn dashclock() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dashclock"));
    cmd.env_remove("DASHCLOCK_ELEMENT").env_remove("DASHCLOCK_PERIOD_MS");
    cmd
}

#[test]
fn recorded_session_replays_to_identical_labels() {
    let dir = std::env::temp_dir().join("dashclock_record_replay_test");
    let _ = std::fs::remove_dir_all(&dir);
    let page = dir.join("page");
    std::fs::create_dir_all(&page).unwrap();
    std::fs::write(page.join("currentDateTime"), "").unwrap();
    let cassette_path = dir.join("session.cassette.yaml");

    // --- Phase 1: record three ticks ---
    let output = dashclock()
        .args(["run", "--surface", "directory", "--ticks", "3", "--period-ms", "10"])
        .arg("--root")
        .arg(&page)
        .arg("--record")
        .arg(&cassette_path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let cassette = Cassette::load(&cassette_path).unwrap();
    let clock_reads = cassette.interactions.iter().filter(|i| i.port == "clock").count();
    let page_writes = cassette.interactions.iter().filter(|i| i.port == "page").count();
    assert!(clock_reads >= 3);
    assert_eq!(clock_reads, page_writes);

    // --- Phase 2: replay through the binary with verification ---
    let output = dashclock().arg("replay").arg(&cassette_path).arg("--verify").output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let printed: Vec<&str> = stdout.lines().collect();
    assert_eq!(printed.len(), clock_reads);

    // The page holds the label of the last recorded tick.
    let last = std::fs::read_to_string(page.join("currentDateTime")).unwrap();
    assert_eq!(printed.last().copied(), Some(last.as_str()));

    // --- Phase 3: replay twice more, determinism check ---
    let first = replay(&cassette, "currentDateTime", true).unwrap();
    let second = replay(&cassette, "currentDateTime", true).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, printed);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replay_of_missing_cassette_fails() {
    let output = dashclock().args(["replay", "/nonexistent/dashclock.cassette.yaml"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read cassette file"));
}
