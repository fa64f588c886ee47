//! Output file handling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Destination for countdown text. Each write replaces the previous
/// content entirely.
pub trait TextSink {
    fn write_all_text(&mut self, contents: &str) -> io::Result<()>;
}

/// Sink backed by a single file on disk.
///
/// Writes the exact bytes of the text with no trailing newline, since
/// consumers (e.g. a streaming overlay reading the file) display the
/// content verbatim. The parent directory is not created; a missing
/// directory surfaces as a write error like any other.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file, e.g. after a run that should not leave the
    /// output behind.
    pub fn remove(&self) -> io::Result<()> {
        fs::remove_file(&self.path)
    }
}

impl TextSink for FileSink {
    fn write_all_text(&mut self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }
}
