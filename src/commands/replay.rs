//! `dashclock replay` command.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adapters::manual::MemoryPage;
use crate::adapters::replaying::ReplayingClock;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::{CLOCK_PORT, PAGE_PORT};
use crate::config::ClockConfig;
use crate::updater::ClockUpdater;

/// Execute the `replay` command.
///
/// Feeds every recorded clock reading through the updater and prints the
/// resulting labels.
///
/// # Errors
///
/// Returns an error string if the cassette cannot be loaded or holds an
/// invalid clock reading, or with `verify` when a label differs from the
/// recorded page write.
pub fn run(path: &Path, element: &str, verify: bool) -> Result<(), String> {
    let cassette = Cassette::load(path)?;
    let labels = replay(&cassette, element, verify)?;
    if labels.is_empty() {
        println!("No clock readings in cassette.");
    }
    for label in &labels {
        println!("{label}");
    }
    Ok(())
}

/// Replays `cassette` and returns the labels in tick order.
///
/// # Errors
///
/// Returns an error string when a recorded clock reading is not a valid
/// instant, when a tick fails, or with `verify` when a replayed label does
/// not match its recorded page write.
pub fn replay(cassette: &Cassette, element: &str, verify: bool) -> Result<Vec<String>, String> {
    check_clock_readings(cassette)?;
    let config = ClockConfig { element_id: element.to_string(), ..ClockConfig::default() };
    let clock = Arc::new(ReplayingClock::new(CassetteReplayer::new(cassette)));
    let page = Arc::new(MemoryPage::with_elements([element]));
    let updater = ClockUpdater::new(clock.clone(), page, &config);
    let mut recorded = CassetteReplayer::new(cassette);

    let mut labels = Vec::new();
    let mut mismatches = 0usize;
    while clock.remaining() > 0 {
        let label = updater.tick().map_err(|e| e.to_string())?;
        if verify {
            let tick = labels.len() + 1;
            let expected = recorded
                .try_next(PAGE_PORT, "set_text")
                .and_then(|i| i.input.get("text").and_then(|t| t.as_str()).map(str::to_string))
                .ok_or_else(|| format!("Cassette has no page write for tick {tick}"))?;
            if expected != label {
                tracing::warn!(tick, %expected, actual = %label, "replayed label differs");
                mismatches += 1;
            }
        }
        labels.push(label);
    }

    if mismatches > 0 {
        return Err(format!(
            "{mismatches} of {} replayed label(s) differ from the recording",
            labels.len()
        ));
    }
    Ok(labels)
}

/// Rejects cassettes whose clock readings would not deserialize on replay.
fn check_clock_readings(cassette: &Cassette) -> Result<(), String> {
    for interaction in &cassette.interactions {
        if interaction.port != CLOCK_PORT || interaction.method != "now" {
            continue;
        }
        serde_json::from_value::<DateTime<Utc>>(interaction.output.clone()).map_err(|e| {
            format!("Cassette has an invalid clock reading at seq {}: {e}", interaction.seq)
        })?;
    }
    Ok(())
}
