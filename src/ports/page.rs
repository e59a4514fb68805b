//! Page port addressing output surfaces by element id.

use crate::error::SurfaceError;

/// A document holding output surfaces.
///
/// Surfaces are created and removed by whatever owns the page. The clock
/// only ever overwrites the text of a surface that already exists.
pub trait Page: Send + Sync {
    /// Locates the element with `element_id` and replaces its visible text.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Lookup`] when no element has that id, or
    /// [`SurfaceError::Write`] when the element exists but cannot be written.
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), SurfaceError>;
}
