//! Rendering of instants into the clock's display text.

use chrono::{DateTime, Utc};

/// Label placed in front of the display string.
pub const LABEL_PREFIX: &str = "Current Date and Time: ";

/// `YYYY-MM-DD HH:MM:SS`, truncated to whole seconds.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `instant` as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Sub-second precision is dropped, never rounded, so `23:59:59.999`
/// stays on the same day.
#[must_use]
pub fn display_string(instant: DateTime<Utc>) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}

/// Joins `prefix` and the display string for `instant`.
#[must_use]
pub fn compose_label(prefix: &str, instant: DateTime<Utc>) -> String {
    format!("{prefix}{}", display_string(instant))
}
