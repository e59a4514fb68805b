//! Clock port for obtaining the current instant.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Every tick reads a fresh instant through this trait, so tests and
/// cassette playback can substitute a manual or recorded clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
