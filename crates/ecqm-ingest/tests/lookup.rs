//! Tests for loading a measure package by name.

use std::fs;

use ecqm_ingest::{IngestError, load_measure_package};
use tempfile::TempDir;

fn package_root() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let package = dir.path().join("CMS2v13");
    fs::create_dir_all(&package).expect("create package");
    fs::write(
        package.join("CMS2v13.json"),
        r#"{"cms_id": "CMS2v13", "title": "Depression Screening", "description": "Screening"}"#,
    )
    .expect("write measure");
    fs::write(
        package.join("value_sets.json"),
        r#"[{"oid": "2.16.840.1"}, {"oid": "2.16.840.2"}]"#,
    )
    .expect("write value sets");
    dir
}

#[test]
fn loads_measure_and_value_sets() {
    let root = package_root();
    let package = load_measure_package(root.path(), "CMS2v13").expect("load package");

    assert_eq!(package.name, "CMS2v13");
    assert_eq!(package.value_set_count(), 2);
    let descriptor = package.descriptor();
    assert_eq!(descriptor.measure_id(), Some("CMS2v13"));
    assert_eq!(descriptor.title.as_deref(), Some("Depression Screening"));
}

#[test]
fn missing_sidecar_is_allowed() {
    let root = package_root();
    fs::remove_file(root.path().join("CMS2v13/value_sets.json")).expect("remove sidecar");

    let package = load_measure_package(root.path(), "CMS2v13").expect("load package");
    assert!(package.value_sets.is_none());
    assert_eq!(package.value_set_count(), 0);
}

#[test]
fn unknown_measure_is_not_found() {
    let root = package_root();
    let err = load_measure_package(root.path(), "CMS999v1").unwrap_err();
    assert!(matches!(err, IngestError::MeasureNotFound { .. }));

    let err = load_measure_package(root.path(), "../CMS2v13").unwrap_err();
    assert!(matches!(err, IngestError::MeasureNotFound { .. }));
}

#[test]
fn malformed_sidecar_is_an_error() {
    let root = package_root();
    fs::write(root.path().join("CMS2v13/value_sets.json"), "{").expect("write sidecar");

    let err = load_measure_package(root.path(), "CMS2v13").unwrap_err();
    assert!(matches!(err, IngestError::JsonParse { .. }));
}
