//! Port traits defining external boundaries.
//!
//! Each trait is one host collaborator of the clock: the time source and
//! the page holding the output surface. The repeating timer is tokio's
//! interval and needs no port. Implementations live in `src/adapters/`.

pub mod clock;
pub mod page;

pub use clock::Clock;
pub use page::Page;
