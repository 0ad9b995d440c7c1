//! In-memory output archive construction

use crate::error::Result;
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};

/// Incrementally builds the output ZIP archive in memory.
///
/// Entries are stored in insertion order; the fixed entry timestamp keeps
/// two runs over the same input byte-identical.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl ArchiveBuilder {
    /// Create an empty write-mode archive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Add a named text entry.
    ///
    /// Adding the same name twice stores a second entry that shadows the
    /// first on extraction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArchiveError`] if the entry cannot be written.
    pub fn add_entry(&mut self, name: &str, text: &str) -> Result<()> {
        let options: FileOptions<()> =
            FileOptions::default().last_modified_time(zip::DateTime::default());
        self.writer.start_file(name, options)?;
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Finalize the central directory and return the archive bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArchiveError`] if finalization fails.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
