//! Cassettes: YAML recordings of clock and page interactions.

pub mod format;
pub mod recorder;
pub mod replayer;

/// Port name used for clock interactions.
pub const CLOCK_PORT: &str = "clock";
/// Port name used for page interactions.
pub const PAGE_PORT: &str = "page";
