//! # kmzsplit-archive
//!
//! In-memory KMZ archive support for kmzsplit.
//!
//! A KMZ file is a ZIP archive carrying one KML document (plus optional
//! embedded resources such as icons and models). This crate covers both
//! directions of the split pipeline's archive boundary:
//!
//! - [`KmzReader`] opens an input archive from raw bytes, locates the
//!   first entry whose name ends in `.kml`, and decodes it as UTF-8 text.
//! - [`ArchiveBuilder`] accumulates named text entries and finalizes them
//!   into a single output ZIP blob.
//!
//! Everything happens in memory; nothing touches the filesystem.
//!
//! ## Example
//!
//! ```
//! use kmzsplit_archive::{ArchiveBuilder, KmzReader};
//!
//! let mut builder = ArchiveBuilder::new();
//! builder.add_entry("doc.kml", "<kml></kml>")?;
//! let bytes = builder.finish()?;
//!
//! let mut reader = KmzReader::open(bytes)?;
//! let text = reader.read_document_text()?;
//! assert_eq!(text, "<kml></kml>");
//! # Ok::<(), kmzsplit_archive::ArchiveError>(())
//! ```

pub mod error;
pub mod read;
pub mod write;

pub use error::{ArchiveError, Result};
pub use read::{DocumentEntry, KmzReader, DOCUMENT_SUFFIX};
pub use write::ArchiveBuilder;
