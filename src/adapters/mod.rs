//! Adapter implementations of the clock and page ports.

pub mod live;
pub mod manual;
pub mod recording;
pub mod replaying;
