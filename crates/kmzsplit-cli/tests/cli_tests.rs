//! CLI integration tests for the `kmzsplit` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};
use zip::ZipArchive;

const SITES_KML: &str = r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document><Folder><Placemark><name>Site S01 Alpha</name></Placemark><Placemark><name>Site S02 Beta</name></Placemark></Folder></Document></kml>"#;

/// Helper: write a KMZ file with the given entries
fn write_kmz(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("create kmz");
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<()> = FileOptions::default();

    for (name, contents) in entries {
        zip.start_file(*name, options).expect("start_file");
        zip.write_all(contents).expect("write_all");
    }

    zip.finish().expect("finish");
}

#[test]
fn test_split_writes_100_entry_archive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("sites.kmz");
    let output = dir.path().join("out.zip");
    write_kmz(&input, &[("doc.kml", SITES_KML.as_bytes())]);

    Command::cargo_bin("kmzsplit")
        .expect("binary")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success();

    let archive = ZipArchive::new(File::open(&output).expect("open output")).expect("zip");
    assert_eq!(archive.len(), 100);
}

#[test]
fn test_missing_kml_entry_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("empty.kmz");
    let output = dir.path().join("out.zip");
    write_kmz(&input, &[("readme.txt", b"nothing")]);

    Command::cargo_bin("kmzsplit")
        .expect("binary")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .kml document entry"));

    assert!(!output.exists(), "no partial output on failure");
}

#[test]
fn test_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("sites.kmz");
    let output = dir.path().join("out.zip");
    write_kmz(&input, &[("doc.kml", SITES_KML.as_bytes())]);
    std::fs::write(&output, b"precious").expect("pre-create output");

    Command::cargo_bin("kmzsplit")
        .expect("binary")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read(&output).expect("read"), b"precious");
}

#[test]
fn test_force_overwrites_existing_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("sites.kmz");
    let output = dir.path().join("out.zip");
    write_kmz(&input, &[("doc.kml", SITES_KML.as_bytes())]);
    std::fs::write(&output, b"stale").expect("pre-create output");

    Command::cargo_bin("kmzsplit")
        .expect("binary")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--force")
        .arg("--quiet")
        .assert()
        .success();

    let archive = ZipArchive::new(File::open(&output).expect("open output")).expect("zip");
    assert_eq!(archive.len(), 100);
}

#[test]
fn test_nonexistent_input_fails() {
    Command::cargo_bin("kmzsplit")
        .expect("binary")
        .arg("does-not-exist.kmz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("kmzsplit")
        .expect("binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kmzsplit"));
}
