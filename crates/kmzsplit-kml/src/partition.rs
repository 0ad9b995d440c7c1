//! Bucket partitioning of a parsed KML tree
//!
//! The documents this tool handles nest as
//! `<kml>` → `<Document>` → `<Folder>` → `<Placemark>`. Partitioning
//! rebuilds that spine for one bucket: folders directly inside a
//! document keep only the placemarks whose `<name>` contains the bucket
//! token. Everything else — styles, loose placemarks outside that spine,
//! folders nested inside folders — passes through unchanged.

use crate::error::{KmlError, Result};
use kml::types::Placemark;
use kml::Kml;

/// Produce a filtered copy of `tree` for one bucket.
///
/// The match is a case-sensitive substring test against the placemark's
/// `<name>`. The input tree is never mutated; every invocation starts
/// from the same parsed document.
///
/// # Errors
///
/// Returns [`KmlError::PlacemarkNameMissing`] if a placemark subject to
/// filtering has no `<name>` element. Absence is an input defect, not a
/// non-match, so the whole run aborts rather than silently dropping the
/// placemark.
pub fn partition(tree: &Kml, token: &str) -> Result<Kml> {
    match tree {
        Kml::KmlDocument(doc) => {
            let mut out = doc.clone();
            out.elements = doc
                .elements
                .iter()
                .map(|element| map_root_child(element, token))
                .collect::<Result<Vec<_>>>()?;
            Ok(Kml::KmlDocument(out))
        }
        // A tree without the <kml> wrapper still gets its documents filtered.
        other => map_root_child(other, token),
    }
}

/// Rewrite a direct child of the root: documents are mapped, the rest
/// passes through.
fn map_root_child(element: &Kml, token: &str) -> Result<Kml> {
    match element {
        Kml::Document { attrs, elements } => Ok(Kml::Document {
            attrs: attrs.clone(),
            elements: elements
                .iter()
                .map(|element| map_document_child(element, token))
                .collect::<Result<Vec<_>>>()?,
        }),
        other => Ok(other.clone()),
    }
}

/// Rewrite a direct child of a document: folders are filtered, the rest
/// passes through.
fn map_document_child(element: &Kml, token: &str) -> Result<Kml> {
    match element {
        Kml::Folder(folder) => {
            let mut out = folder.clone();
            out.elements = filter_folder_children(&folder.elements, token)?;
            Ok(Kml::Folder(out))
        }
        other => Ok(other.clone()),
    }
}

/// Keep a folder's non-placemark children and the placemarks whose name
/// contains the token, in their original order.
fn filter_folder_children(elements: &[Kml], token: &str) -> Result<Vec<Kml>> {
    let mut kept = Vec::with_capacity(elements.len());

    for element in elements {
        match element {
            Kml::Placemark(placemark) => {
                if placemark_matches(placemark, token)? {
                    kept.push(element.clone());
                }
            }
            other => kept.push(other.clone()),
        }
    }

    Ok(kept)
}

fn placemark_matches(placemark: &Placemark, token: &str) -> Result<bool> {
    placemark
        .name
        .as_deref()
        .map(|name| name.contains(token))
        .ok_or(KmlError::PlacemarkNameMissing)
}
