//! Terminal page: a single element rendered as one rewritten line.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::error::SurfaceError;
use crate::ports::Page;

/// Carriage return plus "erase line", so each write replaces the last.
const REWRITE_LINE: &str = "\r\x1b[2K";

/// A page with exactly one element, shown on a terminal-like writer.
pub struct TerminalPage<W> {
    element_id: String,
    out: Mutex<W>,
}

impl TerminalPage<io::Stdout> {
    /// Creates a page whose only element is shown on stdout.
    #[must_use]
    pub fn stdout(element_id: impl Into<String>) -> Self {
        Self::new(element_id, io::stdout())
    }
}

impl<W: Write + Send> TerminalPage<W> {
    /// Creates a page whose only element `element_id` is shown on `out`.
    pub fn new(element_id: impl Into<String>, out: W) -> Self {
        Self { element_id: element_id.into(), out: Mutex::new(out) }
    }

    /// Consumes the page and returns the writer.
    ///
    /// # Panics
    ///
    /// Panics if the writer lock was poisoned.
    pub fn into_inner(self) -> W {
        self.out.into_inner().expect("terminal lock poisoned")
    }
}

impl<W: Write + Send> Page for TerminalPage<W> {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), SurfaceError> {
        if element_id != self.element_id {
            return Err(SurfaceError::lookup(element_id));
        }
        let mut out = self.out.lock().expect("terminal lock poisoned");
        write!(out, "{REWRITE_LINE}{text}")
            .and_then(|()| out.flush())
            .map_err(|source| SurfaceError::Write { element_id: element_id.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_the_line_on_each_write() {
        let page = TerminalPage::new("currentDateTime", Vec::new());
        page.set_text("currentDateTime", "one").unwrap();
        page.set_text("currentDateTime", "two").unwrap();

        let written = String::from_utf8(page.into_inner()).unwrap();
        assert_eq!(written, "\r\x1b[2Kone\r\x1b[2Ktwo");
    }

    #[test]
    fn unknown_element_is_not_found() {
        let page = TerminalPage::new("currentDateTime", Vec::new());
        let err = page.set_text("other", "text").unwrap_err();

        assert!(err.is_lookup());
        assert!(page.into_inner().is_empty());
    }
}
