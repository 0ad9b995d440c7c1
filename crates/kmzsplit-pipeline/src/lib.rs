//! # kmzsplit-pipeline
//!
//! The end-to-end KMZ split pipeline.
//!
//! A run is a single linear sequence with no partial output: open the
//! input archive, locate and decode the KML document entry, parse it
//! once, then for each bucket 1..=100 partition the tree, serialize the
//! result, and add it to the output archive as `<token>.kml`. Any
//! failure aborts the whole run.
//!
//! ## Example
//!
//! ```no_run
//! use kmzsplit_pipeline::split_kmz;
//!
//! let input = std::fs::read("sites.kmz")?;
//! let output = split_kmz(input)?;
//! std::fs::write("buckets.zip", output)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;

pub use error::{Result, SplitError};
pub use kmzsplit_kml::BUCKET_COUNT;

use chrono::NaiveDate;
use kmzsplit_archive::{ArchiveBuilder, KmzReader};
use kmzsplit_kml::{bucket_token, parse_document, partition, serialize_document};
use log::{debug, info};

/// File name for the output archive, dated with the invocation day.
#[must_use]
pub fn archive_file_name(date: NaiveDate) -> String {
    format!("kmzsplitter_{}.zip", date.format("%Y-%m-%d"))
}

/// Entry name for one bucket inside the output archive.
#[must_use]
pub fn entry_name(token: &str) -> String {
    format!("{token}.kml")
}

/// Split a KMZ archive into a ZIP of 100 bucket KML files.
///
/// The output always contains exactly [`BUCKET_COUNT`] entries
/// `S01.kml`..`S100.kml` in ascending order; buckets with no matching
/// placemarks serialize as well-formed documents with empty folders.
///
/// # Errors
///
/// Returns [`SplitError`] when the input is not a valid ZIP archive,
/// contains no `.kml` entry, holds text that is not UTF-8 or not
/// well-formed KML, has a filtered placemark without a `<name>`, or the
/// output archive cannot be finalized. No output is produced in any of
/// these cases.
pub fn split_kmz(bytes: Vec<u8>) -> Result<Vec<u8>> {
    split_kmz_with_progress(bytes, |_, _| {})
}

/// Split with a per-bucket progress hook.
///
/// `on_bucket` is invoked after each bucket entry is written, with the
/// 1-based bucket index and its token.
///
/// # Errors
///
/// Same conditions as [`split_kmz`].
pub fn split_kmz_with_progress<F>(bytes: Vec<u8>, mut on_bucket: F) -> Result<Vec<u8>>
where
    F: FnMut(u32, &str),
{
    let mut reader = KmzReader::open(bytes)?;
    let entry = reader.find_document_entry()?;
    info!("splitting document entry '{}' ({} bytes)", entry.name, entry.size);

    let text = reader.read_entry_as_text(&entry)?;
    let tree = parse_document(&text)?;

    let mut output = ArchiveBuilder::new();
    for index in 1..=BUCKET_COUNT {
        let token = bucket_token(index);
        let bucket = partition(&tree, &token)?;
        let kml_text = serialize_document(&bucket)?;
        output.add_entry(&entry_name(&token), &kml_text)?;

        // Index doubles as a percentage: 100 buckets.
        debug!("{index}%");
        on_bucket(index, &token);
    }

    let archive = output.finish()?;
    info!("output archive: {} entries, {} bytes", BUCKET_COUNT, archive.len());
    Ok(archive)
}
