//! Descriptor file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

/// File name of the value-set payload stored next to each measure descriptor.
pub const VALUE_SETS_FILE: &str = "value_sets.json";

/// Recursively lists measure descriptor files under `root`.
///
/// Only `.json` files are returned; value-set sidecars are excluded.
/// Entries that cannot be read are logged and skipped. The result is sorted
/// by path so sequence numbers do not depend on directory enumeration order.
pub fn list_measure_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(root = %root.display(), %error, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_json(path) && !is_value_set_sidecar(path) {
            debug!(path = %path.display(), "discovered measure descriptor");
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Checks if a path is a value-set sidecar rather than a measure descriptor.
///
/// Matches `value_sets.json` and prefixed variants such as
/// `CMS2v13_value_sets.json`, case-insensitively.
pub fn is_value_set_sidecar(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(VALUE_SETS_FILE))
}
