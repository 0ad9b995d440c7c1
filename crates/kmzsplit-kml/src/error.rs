//! Error types for KML document handling

use thiserror::Error;

/// Errors that can occur while parsing, partitioning, or serializing KML
#[derive(Debug, Error)]
pub enum KmlError {
    /// KML parsing error
    #[error("KML parsing error: {0}")]
    Parse(String),

    /// KML serialization error
    #[error("KML serialization error: {0}")]
    Serialize(String),

    /// A placemark subject to bucket filtering has no `<name>` element
    #[error("placemark has no <name> element")]
    PlacemarkNameMissing,
}

/// Result type for KML operations
pub type Result<T> = std::result::Result<T, KmlError>;
