//! `dashclock once` command.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adapters::live::LiveClock;
use crate::adapters::manual::{ManualClock, MemoryPage};
use crate::config::ClockConfig;
use crate::ports::Clock;
use crate::updater::ClockUpdater;

/// Execute the `once` command.
///
/// Runs a single tick against an in-memory page and prints the label.
///
/// # Errors
///
/// Returns an error string if the tick fails.
pub fn run(at: Option<DateTime<Utc>>) -> Result<(), String> {
    println!("{}", label(at)?);
    Ok(())
}

fn label(at: Option<DateTime<Utc>>) -> Result<String, String> {
    let config = ClockConfig::default();
    let clock: Arc<dyn Clock> = match at {
        Some(instant) => Arc::new(ManualClock::new(instant)),
        None => Arc::new(LiveClock),
    };
    let page = Arc::new(MemoryPage::with_elements([config.element_id.as_str()]));
    ClockUpdater::new(clock, page, &config).tick().map_err(|e| e.to_string())
}
