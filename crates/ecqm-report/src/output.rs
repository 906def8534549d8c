use std::fs;
use std::path::{Path, PathBuf};

use ecqm_model::ListDefinition;
use tracing::info;

use crate::error::{ReportError, Result};

/// Path the script for `list` is written to inside `output_dir`.
pub fn script_path(output_dir: &Path, list: &ListDefinition) -> PathBuf {
    output_dir.join(list.file_name())
}

/// Writes `script` to `<output_dir>/<list_id>.sql`, creating the directory
/// and replacing any previous file.
pub fn write_script(output_dir: &Path, list: &ListDefinition, script: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = script_path(output_dir, list);
    fs::write(&path, script).map_err(|source| ReportError::WriteFile {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = script.len(), "SQL list written");
    Ok(path)
}
