//! KML document parsing and serialization
//!
//! Thin wrappers over the `kml` crate. The parsed [`Kml`] tree keeps
//! unknown tags as generic elements, so a parse → serialize → parse
//! round trip reproduces the original structure.

use crate::error::{KmlError, Result};
use kml::{Kml, KmlWriter};
use std::str::FromStr;

/// XML declaration emitted ahead of each serialized document.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Parse KML text into a document tree.
///
/// # Errors
///
/// Returns [`KmlError::Parse`] carrying the underlying reason when the
/// text is not well-formed KML.
pub fn parse_document(text: &str) -> Result<Kml> {
    Kml::from_str(text).map_err(|e| KmlError::Parse(e.to_string()))
}

/// Serialize a document tree back to KML text.
///
/// The output carries an XML declaration and the `<kml>` root wrapper
/// (assuming the tree was parsed from a complete document), so every
/// bucket file is well-formed on its own even with zero placemarks.
///
/// # Errors
///
/// Returns [`KmlError::Serialize`] if the tree cannot be written.
pub fn serialize_document(tree: &Kml) -> Result<String> {
    let mut buf = Vec::new();
    let mut writer = KmlWriter::from_writer(&mut buf);
    writer
        .write(tree)
        .map_err(|e| KmlError::Serialize(e.to_string()))?;

    let body = String::from_utf8(buf).map_err(|e| KmlError::Serialize(e.to_string()))?;
    Ok(format!("{XML_DECLARATION}\n{body}"))
}
