//! Directory page: each element is a file named after its id.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::SurfaceError;
use crate::ports::Page;

/// A page stored as a directory of element files.
///
/// The element `foo` is the file `<root>/foo`. Elements are created by
/// whoever owns the directory; a missing file is a lookup failure and is
/// never created here.
#[derive(Debug, Clone)]
pub struct DirectoryPage {
    root: PathBuf,
}

impl DirectoryPage {
    /// Creates a page rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn element_path(&self, element_id: &str) -> Option<PathBuf> {
        // Ids are single path components; anything else cannot name an element.
        let is_plain = !element_id.is_empty()
            && element_id != "."
            && element_id != ".."
            && !element_id.contains(['/', '\\']);
        is_plain.then(|| self.root.join(element_id))
    }
}

impl Page for DirectoryPage {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), SurfaceError> {
        let path = self.element_path(element_id).ok_or_else(|| SurfaceError::lookup(element_id))?;
        let write_error = |source: io::Error| {
            if source.kind() == io::ErrorKind::NotFound || path.is_dir() {
                SurfaceError::lookup(element_id)
            } else {
                SurfaceError::Write { element_id: element_id.to_string(), source }
            }
        };
        // No `create`: an element that is gone stays gone.
        let mut file =
            OpenOptions::new().write(true).truncate(true).open(&path).map_err(write_error)?;
        file.write_all(text.as_bytes()).map_err(write_error)
    }
}
