//! The clock updater: one tick renders the time into the output surface.

use std::sync::Arc;

use crate::config::ClockConfig;
use crate::display::compose_label;
use crate::error::SurfaceError;
use crate::ports::{Clock, Page};

/// Writes the current time into a single output surface.
pub struct ClockUpdater {
    clock: Arc<dyn Clock>,
    page: Arc<dyn Page>,
    element_id: String,
    prefix: String,
}

impl ClockUpdater {
    /// Creates an updater writing to `config.element_id` on `page`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, page: Arc<dyn Page>, config: &ClockConfig) -> Self {
        Self {
            clock,
            page,
            element_id: config.element_id.clone(),
            prefix: config.prefix.clone(),
        }
    }

    /// Id of the surface this updater owns.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Reads the clock, composes the label and writes it to the surface.
    ///
    /// Returns the written label.
    ///
    /// # Errors
    ///
    /// Propagates the page's [`SurfaceError`] unchanged. Nothing is retried.
    pub fn tick(&self) -> Result<String, SurfaceError> {
        let label = compose_label(&self.prefix, self.clock.now());
        self.page.set_text(&self.element_id, &label)?;
        Ok(label)
    }
}
