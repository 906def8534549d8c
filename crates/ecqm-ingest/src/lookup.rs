//! Loading a single measure package by name.
//!
//! Extracted packages are laid out as `<root>/<name>/<name>.json` with the
//! value-set payload beside it in `<root>/<name>/value_sets.json`.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::discovery::VALUE_SETS_FILE;
use crate::error::{IngestError, Result};
use crate::extract::{MeasureDescriptor, parse_unbounded, read_to_string};

/// A measure descriptor together with its value-set sidecar.
#[derive(Debug, Clone)]
pub struct MeasurePackage {
    pub name: String,
    pub measure_path: PathBuf,
    pub measure: Value,
    /// `None` when the package has no sidecar.
    pub value_sets: Option<Value>,
}

impl MeasurePackage {
    /// Typed view of the measure's identity fields.
    pub fn descriptor(&self) -> MeasureDescriptor {
        MeasureDescriptor::from_value(&self.measure).unwrap_or_default()
    }

    /// Number of value sets in the sidecar (array entries or object keys).
    pub fn value_set_count(&self) -> usize {
        match &self.value_sets {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(map)) => map.len(),
            _ => 0,
        }
    }
}

/// Loads the package for `measure` from `root`.
pub fn load_measure_package(root: &Path, measure: &str) -> Result<MeasurePackage> {
    let not_found = || IngestError::MeasureNotFound {
        measure: measure.to_string(),
        root: root.to_path_buf(),
    };
    if measure.is_empty() || measure.contains(['/', '\\']) || measure == ".." {
        return Err(not_found());
    }

    let package_dir = root.join(measure);
    let measure_path = package_dir.join(format!("{measure}.json"));
    if !measure_path.is_file() {
        return Err(not_found());
    }
    let measure_json = read_json(&measure_path)?;

    let value_sets_path = package_dir.join(VALUE_SETS_FILE);
    let value_sets = if value_sets_path.is_file() {
        Some(read_json(&value_sets_path)?)
    } else {
        debug!(path = %value_sets_path.display(), "measure package has no value sets");
        None
    };

    Ok(MeasurePackage {
        name: measure.to_string(),
        measure_path,
        measure: measure_json,
        value_sets,
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let text = read_to_string(path)?;
    parse_unbounded(&text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
