//! End-to-end tests for the generate pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use ecqm_cli::config::{GenerateRequest, GeneratorConfig};
use ecqm_cli::pipeline::{GenerateError, run_generate};
use ecqm_model::{DefaultSet, ModelError};
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
    fs::write(path, contents).expect("write file");
}

/// Lays out `<base>/2025_reporting_period/json_measures/<id>/<id>.json` plus sidecars.
fn measures_fixture() -> TempDir {
    let base = TempDir::new().expect("temp dir");
    let root = base.path().join("2025_reporting_period/json_measures");
    for (id, title) in [("M1", "A"), ("M2", "B's"), ("M3", "C")] {
        write(
            &root.join(id).join(format!("{id}.json")),
            &format!(r#"{{"cms_id": "{id}", "title": "{title}", "description": null}}"#),
        );
        write(&root.join(id).join("value_sets.json"), r#"[{"oid": "1.2.3"}]"#);
    }
    base
}

fn request(base: &Path) -> GenerateRequest {
    GenerateRequest {
        base_dir: base.to_path_buf(),
        output_dir: base.join("output"),
        defaults: DefaultSet::parse("M2"),
        year: Some(2025),
        ..GenerateRequest::default()
    }
}

#[test]
fn generates_list_from_year() {
    let base = measures_fixture();
    let config = GeneratorConfig::resolve(&request(base.path())).expect("resolve");

    let result = run_generate(&config).expect("generate");

    let expected_path = base.path().join("output/ecqm_2025_reporting.sql");
    assert_eq!(result.output_path.as_deref(), Some(expected_path.as_path()));
    assert_eq!(result.measure_count, 3);
    assert_eq!(result.active_count, 1);
    assert!(result.skipped.is_empty());
    assert!(result.unmatched_defaults.is_empty());

    let written = fs::read_to_string(&expected_path).expect("read output");
    assert_eq!(written, result.script);
    insta::assert_snapshot!(written, @r#"
INSERT INTO `list_options` (`list_id`, `option_id`, `title`, `seq`, `is_default`, `option_value`, `notes`) VALUES ('lists','ecqm_2025_reporting','eCQM 2025 Performance Period',0,1,0, '');
INSERT INTO `list_options` (`list_id`, `option_id`, `title`, `seq`, `activity`, `notes`) VALUES ('ecqm_2025_reporting','M1','A',10,0,'');
INSERT INTO `list_options` (`list_id`, `option_id`, `title`, `seq`, `activity`, `notes`) VALUES ('ecqm_2025_reporting','M2','B\'s',20,1,'');
INSERT INTO `list_options` (`list_id`, `option_id`, `title`, `seq`, `activity`, `notes`) VALUES ('ecqm_2025_reporting','M3','C',30,0,'');
"#);
}

#[test]
fn rerun_produces_identical_output() {
    let base = measures_fixture();
    let config = GeneratorConfig::resolve(&request(base.path())).expect("resolve");

    let first = run_generate(&config).expect("first run");
    let path: PathBuf = first.output_path.expect("written");
    let first_bytes = fs::read(&path).expect("read first");

    run_generate(&config).expect("second run");
    assert_eq!(fs::read(&path).expect("read second"), first_bytes);
}

#[test]
fn invalid_descriptors_are_skipped_not_fatal() {
    let base = measures_fixture();
    let root = base.path().join("2025_reporting_period/json_measures");
    write(&root.join("BAD/BAD.json"), "{ not json");
    write(&root.join("NOTITLE/NOTITLE.json"), r#"{"cms_id": "NOTITLE"}"#);
    let config = GeneratorConfig::resolve(&request(base.path())).expect("resolve");

    let result = run_generate(&config).expect("generate");

    assert_eq!(result.measure_count, 3);
    assert_eq!(result.skipped.len(), 2);
    assert!(!result.script.contains("NOTITLE"));
}

#[test]
fn only_sidecars_aborts_without_output() {
    let base = TempDir::new().expect("temp dir");
    write(
        &base
            .path()
            .join("2025_reporting_period/json_measures/M1/value_sets.json"),
        "[]",
    );
    let config = GeneratorConfig::resolve(&request(base.path())).expect("resolve");

    let err = run_generate(&config).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GenerateError>(),
        Some(GenerateError::NoValidMeasures { .. })
    ));
    assert!(!base.path().join("output").exists());
}

#[test]
fn missing_input_directory_is_fatal() {
    let base = TempDir::new().expect("temp dir");
    let config = GeneratorConfig::resolve(&request(base.path())).expect("resolve");

    let err = run_generate(&config).unwrap_err();

    assert!(format!("{err:#}").contains("directory not found"));
    assert!(!base.path().join("output").exists());
}

#[test]
fn unresolved_identity_fails_before_scanning() {
    let base = measures_fixture();
    let request = GenerateRequest {
        year: None,
        ..request(base.path())
    };

    let err = GeneratorConfig::resolve(&request).unwrap_err();

    assert!(matches!(err, ModelError::IdentityUnresolved { .. }));
    assert!(!base.path().join("output").exists());
}

#[test]
fn list_id_cannot_leave_output_dir() {
    let base = measures_fixture();
    let request = GenerateRequest {
        list_id: Some("../../escaped".to_string()),
        list_title: Some("Escaped".to_string()),
        ..request(base.path())
    };

    let err = GeneratorConfig::resolve(&request).unwrap_err();

    assert!(matches!(err, ModelError::InvalidListId { .. }));
    assert!(!base.path().join("output").exists());
    assert!(!base.path().join("escaped.sql").exists());
}

#[test]
fn explicit_identity_names_output_file() {
    let base = measures_fixture();
    let request = GenerateRequest {
        list_id: Some("ecqm_custom".to_string()),
        list_title: Some("Custom eCQMs".to_string()),
        ..request(base.path())
    };
    let config = GeneratorConfig::resolve(&request).expect("resolve");

    let result = run_generate(&config).expect("generate");

    let path = base.path().join("output/ecqm_custom.sql");
    assert_eq!(result.output_path.as_deref(), Some(path.as_path()));
    let script = fs::read_to_string(&path).expect("read output");
    assert!(script.starts_with(
        "INSERT INTO `list_options` (`list_id`, `option_id`, `title`, `seq`, `is_default`, \
         `option_value`, `notes`) VALUES ('lists','ecqm_custom','Custom eCQMs',0,1,0, '');\n"
    ));
}

#[test]
fn dry_run_writes_nothing() {
    let base = measures_fixture();
    let request = GenerateRequest {
        dry_run: true,
        defaults: DefaultSet::parse("M2,CMS999v1"),
        ..request(base.path())
    };
    let config = GeneratorConfig::resolve(&request).expect("resolve");

    let result = run_generate(&config).expect("generate");

    assert!(result.output_path.is_none());
    assert_eq!(result.script.lines().count(), 4);
    assert_eq!(result.unmatched_defaults, vec!["CMS999v1".to_string()]);
    assert!(!base.path().join("output").exists());
}
