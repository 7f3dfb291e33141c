use prompt_report::fixtures::{FixtureError, FixtureSet};
use serde_yaml::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_reports_the_exact_error_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("integration-test.yaml");
    let err = FixtureSet::load(&path).unwrap_err();
    assert!(matches!(err, FixtureError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        format!("ERROR: YAML file not found at {}", path.display())
    );
}

#[test]
fn empty_and_rootless_documents_report_the_malformed_root_line() {
    let dir = tempdir().unwrap();
    for content in ["", "null", "other: 1\n"] {
        let path = dir.path().join("fixture.yaml");
        fs::write(&path, content).unwrap();
        let err = FixtureSet::load(&path).unwrap_err();
        assert!(matches!(err, FixtureError::MissingRoot), "content {content:?}");
        assert_eq!(
            err.to_string(),
            "ERROR: YAML file is malformed or missing 'integration-test' root key."
        );
    }
}

#[test]
fn syntax_errors_report_the_parse_error_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fixture.yaml");
    fs::write(&path, "integration-test: [unclosed\n").unwrap();
    let err = FixtureSet::load(&path).unwrap_err();
    assert!(matches!(err, FixtureError::Parse(_)));
    assert!(err
        .to_string()
        .starts_with("ERROR: Could not parse YAML file: "));
}

#[test]
fn categories_come_back_in_fixed_order_with_empty_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fixture.yaml");
    let yaml = r#"
integration-test:
  prompt:
    ok:
      - "hello"
"#;
    fs::write(&path, yaml).unwrap();
    let fixtures = FixtureSet::load(&path).unwrap();
    let labels: Vec<&str> = fixtures.categories.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["prompt.ok", "prompt.ng", "personal.ok", "personal.ng"]);
    assert_eq!(
        fixtures.categories["prompt.ok"],
        Value::Sequence(vec![Value::String("hello".into())])
    );
    for label in ["prompt.ng", "personal.ok", "personal.ng"] {
        assert_eq!(fixtures.categories[label], Value::Sequence(vec![]));
    }
}

#[test]
fn mistyped_categories_are_kept_raw_for_the_run_loop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fixture.yaml");
    let yaml = r#"
integration-test:
  personal:
    ok:
      nested: true
"#;
    fs::write(&path, yaml).unwrap();
    let fixtures = FixtureSet::load(&path).unwrap();
    assert!(matches!(
        fixtures.categories["personal.ok"],
        Value::Mapping(_)
    ));
}
