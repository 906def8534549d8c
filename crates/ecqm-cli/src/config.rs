//! Run configuration, resolved once at startup.

use std::path::{Path, PathBuf};

use ecqm_model::{DefaultSet, ListDefinition, Result};

/// Directory holding extracted measure descriptors.
pub const DEFAULT_JSON_DIR: &str = "json_measures";
/// Directory the SQL script is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Options as supplied by the caller, before resolution.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub list_id: Option<String>,
    pub list_title: Option<String>,
    pub base_dir: PathBuf,
    pub json_dir: PathBuf,
    pub output_dir: PathBuf,
    pub defaults: DefaultSet,
    pub year: Option<u16>,
    pub dry_run: bool,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            list_id: None,
            list_title: None,
            base_dir: PathBuf::from("."),
            json_dir: PathBuf::from(DEFAULT_JSON_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            defaults: DefaultSet::default(),
            year: None,
            dry_run: false,
        }
    }
}

/// Immutable settings shared by every pipeline stage.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub list: ListDefinition,
    /// Root scanned for descriptor files.
    pub input_root: PathBuf,
    pub output_dir: PathBuf,
    pub defaults: DefaultSet,
    /// Render without writing the script.
    pub dry_run: bool,
}

impl GeneratorConfig {
    /// Resolves list identity and the input root.
    ///
    /// Fails when the list identity cannot be determined; no files are
    /// touched before that check.
    pub fn resolve(request: &GenerateRequest) -> Result<Self> {
        let list = ListDefinition::resolve(
            request.list_id.as_deref(),
            request.list_title.as_deref(),
            request.year,
        )?;
        Ok(Self {
            list,
            input_root: input_root(&request.base_dir, &request.json_dir, request.year),
            output_dir: request.output_dir.clone(),
            defaults: request.defaults.clone(),
            dry_run: request.dry_run,
        })
    }
}

/// Input descriptors are partitioned by reporting year:
/// `<base>/<year>_reporting_period/<json_dir>`, or `<base>/<json_dir>`
/// when no year is given.
pub fn input_root(base_dir: &Path, json_dir: &Path, year: Option<u16>) -> PathBuf {
    match year {
        Some(year) => base_dir
            .join(format!("{year}_reporting_period"))
            .join(json_dir),
        None => base_dir.join(json_dir),
    }
}
