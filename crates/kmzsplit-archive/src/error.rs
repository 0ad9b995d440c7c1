//! Error types for KMZ archive operations

use thiserror::Error;

/// Errors that can occur while reading or writing KMZ archives
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// IO error during archive operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or corrupted ZIP container
    #[error("Invalid ZIP archive: {0}")]
    InvalidZip(#[from] zip::result::ZipError),

    /// Archive is password-protected
    #[error("Archive is password-protected")]
    PasswordProtected,

    /// No entry ending in `.kml` exists in the archive
    #[error("no .kml document entry found in the archive")]
    DocumentNotFound,

    /// Entry bytes are not valid UTF-8 text
    #[error("entry '{name}' is not valid UTF-8: {source}")]
    Decode {
        /// Name of the entry that failed to decode
        name: String,
        /// Underlying UTF-8 error
        source: std::string::FromUtf8Error,
    },
}

/// Result type for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;
