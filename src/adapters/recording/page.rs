//! Recording adapter for the `Page` port.

use serde::Serialize;

use super::{record_result, SharedRecorder};
use crate::cassette::PAGE_PORT;
use crate::error::SurfaceError;
use crate::ports::Page;

#[derive(Serialize)]
struct SetText<'a> {
    element_id: &'a str,
    text: &'a str,
}

/// Records every write, successful or not, while delegating to an inner page.
pub struct RecordingPage {
    inner: Box<dyn Page>,
    recorder: SharedRecorder,
}

impl RecordingPage {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Page>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Page for RecordingPage {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), SurfaceError> {
        let result = self.inner.set_text(element_id, text);
        record_result(&self.recorder, PAGE_PORT, "set_text", &SetText { element_id, text }, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::manual::MemoryPage;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn records_successes_and_lookup_failures() {
        let dir = std::env::temp_dir().join("dashclock_rec_page_test");
        let path = dir.join("page.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "page")));

        {
            let page = RecordingPage::new(
                Box::new(MemoryPage::with_elements(["currentDateTime"])),
                Arc::clone(&recorder),
            );
            page.set_text("currentDateTime", "hello").unwrap();
            assert!(page.set_text("missing", "hello").is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        let ok = &cassette.interactions[0];
        assert_eq!(ok.input, json!({"element_id": "currentDateTime", "text": "hello"}));
        assert_eq!(ok.output, json!({"Ok": null}));
        let err = &cassette.interactions[1];
        assert_eq!(err.output, json!({"Err": "no element with id \"missing\" on the page"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
