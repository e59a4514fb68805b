//! Errors raised while writing to an output surface.

use std::io;

use thiserror::Error;

/// Failure of a single tick's write step.
///
/// Neither variant is retried. The schedule logs it and the next tick runs
/// as usual.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The element id does not resolve to an existing element.
    #[error("no element with id {element_id:?} on the page")]
    Lookup {
        /// The id that was looked up.
        element_id: String,
    },
    /// The element exists but its text could not be written.
    #[error("failed to write element {element_id:?}")]
    Write {
        /// The id of the element being written.
        element_id: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl SurfaceError {
    /// Builds a lookup failure for `element_id`.
    pub fn lookup(element_id: impl Into<String>) -> Self {
        Self::Lookup { element_id: element_id.into() }
    }

    /// Returns true when the element could not be located.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }
}
