//! # kmzsplit-kml
//!
//! KML document handling for kmzsplit: parsing, bucket partitioning, and
//! serialization.
//!
//! The documents this tool processes follow the
//! `<kml>` → `<Document>` → `<Folder>` → `<Placemark>` nesting used by
//! site-survey exports. Each placemark name carries a site token
//! (`S01`..`S100`); [`partition`] extracts the sub-document for one
//! token, and [`serialize_document`] turns it back into a standalone
//! KML file.
//!
//! ## Example
//!
//! ```
//! use kmzsplit_kml::{bucket_token, parse_document, partition, serialize_document};
//!
//! let tree = parse_document(
//!     r#"<kml><Document><Folder>
//!         <Placemark><name>Site S01 Alpha</name></Placemark>
//!         <Placemark><name>Site S02 Beta</name></Placemark>
//!     </Folder></Document></kml>"#,
//! )?;
//!
//! let token = bucket_token(1);
//! let bucket = partition(&tree, &token)?;
//! let text = serialize_document(&bucket)?;
//! assert!(text.contains("Site S01 Alpha"));
//! assert!(!text.contains("Site S02 Beta"));
//! # Ok::<(), kmzsplit_kml::KmlError>(())
//! ```

pub mod bucket;
pub mod document;
pub mod error;
pub mod partition;

pub use bucket::{bucket_token, bucket_tokens, BUCKET_COUNT};
pub use document::{parse_document, serialize_document};
pub use error::{KmlError, Result};
pub use partition::partition;
