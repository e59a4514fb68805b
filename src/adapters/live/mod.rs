//! Live adapters backed by the system clock, a terminal, or the filesystem.

pub mod clock;
pub mod directory;
pub mod terminal;

pub use clock::LiveClock;
pub use directory::DirectoryPage;
pub use terminal::TerminalPage;
