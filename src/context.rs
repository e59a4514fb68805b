//! Service context bundling the clock and page ports.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveClock;
use crate::adapters::recording::{RecordingClock, RecordingPage, SharedRecorder};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{Clock, Page};

/// The ports one clock session runs against.
///
/// Constructors wire different adapters behind the same fields.
pub struct ServiceContext {
    /// Source of the current instant.
    pub clock: Arc<dyn Clock>,
    /// Page holding the output surface.
    pub page: Arc<dyn Page>,
    /// Cassette recorder shared by the recording adapters, if recording.
    recorder: Option<SharedRecorder>,
}

impl ServiceContext {
    /// Live system clock writing to `page`.
    #[must_use]
    pub fn live(page: Box<dyn Page>) -> Self {
        Self { clock: Arc::new(LiveClock), page: Arc::from(page), recorder: None }
    }

    /// Like [`ServiceContext::live`], but every clock reading and page write
    /// is also recorded into a cassette at `path`.
    ///
    /// The cassette is written by [`ServiceContext::finish`].
    #[must_use]
    pub fn recording(page: Box<dyn Page>, path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "dashclock-session")));
        Self {
            clock: Arc::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            page: Arc::new(RecordingPage::new(page, Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Whether this context records a cassette.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Releases the ports and writes the cassette when recording.
    ///
    /// Returns the cassette path, or `None` for a live context.
    ///
    /// # Errors
    ///
    /// Returns an error if a port is still held elsewhere (for example by a
    /// running schedule) or the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { clock, page, recorder } = self;
        drop(clock);
        drop(page);
        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "Recording adapters still have references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map(Some).map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::manual::MemoryPage;
    use crate::cassette::format::Cassette;

    #[test]
    fn live_context_finishes_without_cassette() {
        let ctx = ServiceContext::live(Box::new(MemoryPage::default()));
        assert!(!ctx.is_recording());
        assert_eq!(ctx.finish().unwrap(), None);
    }

    #[test]
    fn recording_context_writes_clock_and_page_interactions() {
        let dir = std::env::temp_dir().join("dashclock_ctx_recording");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("session.cassette.yaml");

        let ctx = ServiceContext::recording(
            Box::new(MemoryPage::with_elements(["currentDateTime"])),
            &path,
        );
        assert!(ctx.is_recording());
        let _ = ctx.clock.now();
        ctx.page.set_text("currentDateTime", "x").unwrap();

        let written = ctx.finish().unwrap();
        assert_eq!(written.as_deref(), Some(path.as_path()));

        let cassette = Cassette::load(&path).unwrap();
        let ports: Vec<&str> = cassette.interactions.iter().map(|i| i.port.as_str()).collect();
        assert_eq!(ports, vec!["clock", "page"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn finish_refuses_while_ports_are_shared() {
        let dir = std::env::temp_dir().join("dashclock_ctx_shared");
        let ctx = ServiceContext::recording(Box::new(MemoryPage::default()), &dir.join("x.yaml"));
        let held = Arc::clone(&ctx.clock);

        let err = ctx.finish().unwrap_err();
        assert!(err.contains("still have references"));
        drop(held);
    }
}
