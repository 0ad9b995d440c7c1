//! Error type for the split pipeline

use kmzsplit_archive::ArchiveError;
use kmzsplit_kml::KmlError;
use thiserror::Error;

/// Errors that can occur during a split run.
///
/// Every variant is fatal to the run: the pipeline produces either a
/// complete 100-entry archive or nothing.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Input or output archive failure
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// KML parse, partition, or serialization failure
    #[error("KML error: {0}")]
    Kml(#[from] KmlError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, SplitError>;
