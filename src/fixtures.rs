use indexmap::IndexMap;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the fixture file lives relative to the working directory.
pub const DEFAULT_FIXTURE_PATH: &str =
    "integration-tester/src/main/resources/integration-test.yaml";

pub const ROOT_KEY: &str = "integration-test";

// Category order is fixed: subjects outer, expectations inner.
pub const SUBJECTS: [&str; 2] = ["prompt", "personal"];
pub const EXPECTATIONS: [&str; 2] = ["ok", "ng"];

/// Load failures are reported outcomes, not crashes: each display string is
/// the exact line the caller puts into the report body.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("ERROR: YAML file not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("ERROR: Could not read YAML file: {0}")]
    Read(#[from] std::io::Error),
    #[error("ERROR: Could not parse YAML file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("ERROR: YAML file is malformed or missing 'integration-test' root key.")]
    MissingRoot,
}

/// The four prompt categories, keyed `"<subject>.<expectation>"` in fixed
/// order. Values stay raw: a category may hold anything the YAML said, and
/// the run loop decides whether it is usable as a list.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub categories: IndexMap<String, Value>,
}

impl FixtureSet {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        if !path.exists() {
            return Err(FixtureError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        // An empty document counts as a missing root key, not a parse error.
        if content.trim().is_empty() {
            return Err(FixtureError::MissingRoot);
        }
        let doc: Value = serde_yaml::from_str(&content)?;
        let Some(root) = doc.get(ROOT_KEY) else {
            return Err(FixtureError::MissingRoot);
        };

        let mut categories = IndexMap::new();
        for subject in SUBJECTS {
            for expectation in EXPECTATIONS {
                let value = root
                    .get(subject)
                    .and_then(|s| s.get(expectation))
                    .cloned()
                    .unwrap_or_else(|| Value::Sequence(Vec::new()));
                categories.insert(format!("{subject}.{expectation}"), value);
            }
        }
        Ok(Self { categories })
    }
}

/// YAML type name for warnings about mistyped categories.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
