//! In-process adapters: a settable clock and an in-memory page.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::error::SurfaceError;
use crate::ports::{Clock, Page};

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock stopped at `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// Moves the clock forward by `by`.
    ///
    /// # Panics
    ///
    /// Panics if the clock lock was poisoned.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}

/// A page whose elements live in memory.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Mutex<HashMap<String, String>>,
}

impl MemoryPage {
    /// Creates a page with the given empty elements.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids.into_iter().map(|id| (id.into(), String::new())).collect();
        Self { elements: Mutex::new(elements) }
    }

    /// Adds an empty element, leaving an existing one untouched.
    ///
    /// # Panics
    ///
    /// Panics if the page lock was poisoned.
    pub fn insert_element(&self, id: impl Into<String>) {
        self.elements.lock().expect("page lock poisoned").entry(id.into()).or_default();
    }

    /// Current text of the element, or `None` if there is no such element.
    ///
    /// # Panics
    ///
    /// Panics if the page lock was poisoned.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.lock().expect("page lock poisoned").get(id).cloned()
    }
}

impl Page for MemoryPage {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), SurfaceError> {
        let mut elements = self.elements.lock().expect("page lock poisoned");
        let slot = elements.get_mut(element_id).ok_or_else(|| SurfaceError::lookup(element_id))?;
        text.clone_into(slot);
        Ok(())
    }
}
