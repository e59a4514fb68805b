//! Replaying adapters that serve recorded interactions.

pub mod clock;

pub use clock::ReplayingClock;
