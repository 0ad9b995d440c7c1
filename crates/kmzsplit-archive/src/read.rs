//! KMZ archive reading
//!
//! Opens a KMZ (zipped KML) byte buffer and locates the single KML
//! document entry inside it.

use crate::error::{ArchiveError, Result};
use log::debug;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Entry-name suffix that marks the KML document inside a KMZ archive.
///
/// The match is case-sensitive: `doc.KML` does not qualify.
pub const DOCUMENT_SUFFIX: &str = ".kml";

/// Handle to the located document entry within a KMZ archive
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DocumentEntry {
    /// Index of the entry in the archive's central directory
    pub index: usize,
    /// Entry name as stored in the archive
    pub name: String,
    /// Uncompressed size in bytes
    pub size: u64,
}

/// In-memory reader over a KMZ archive
pub struct KmzReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl KmzReader {
    /// Open a KMZ archive from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidZip`] if the bytes are not a valid
    /// ZIP container.
    pub fn open(bytes: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self { archive })
    }

    /// Number of entries in the archive
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Locate the first entry whose name ends in [`DOCUMENT_SUFFIX`].
    ///
    /// Entries are scanned in central-directory order.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DocumentNotFound`] if no such entry exists.
    pub fn find_document_entry(&mut self) -> Result<DocumentEntry> {
        for i in 0..self.archive.len() {
            let entry = self.archive.by_index(i)?;
            if entry.name().ends_with(DOCUMENT_SUFFIX) {
                return Ok(DocumentEntry {
                    index: i,
                    name: entry.name().to_string(),
                    size: entry.size(),
                });
            }
        }
        Err(ArchiveError::DocumentNotFound)
    }

    /// Decompress the entry and decode its bytes as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::PasswordProtected`] if the entry is
    /// encrypted, [`ArchiveError::Decode`] if its bytes are not valid
    /// UTF-8.
    pub fn read_entry_as_text(&mut self, entry: &DocumentEntry) -> Result<String> {
        let mut file = self.archive.by_index(entry.index)?;

        if file.encrypted() {
            return Err(ArchiveError::PasswordProtected);
        }

        let mut contents = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
        file.read_to_end(&mut contents)?;

        String::from_utf8(contents).map_err(|source| ArchiveError::Decode {
            name: entry.name.clone(),
            source,
        })
    }

    /// Locate the document entry and read it as text in one step.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::find_document_entry`] and
    /// [`Self::read_entry_as_text`].
    pub fn read_document_text(&mut self) -> Result<String> {
        let entry = self.find_document_entry()?;
        debug!("document entry '{}' ({} bytes)", entry.name, entry.size);
        self.read_entry_as_text(&entry)
    }
}
