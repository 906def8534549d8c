//! The generate pipeline: discover, extract, render, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use ecqm_ingest::{SkippedFile, extract_measures, list_measure_files};
use ecqm_model::ListDefinition;
use ecqm_report::{render_list, render_script, write_script};
use thiserror::Error;
use tracing::{info, info_span, warn};

use crate::config::GeneratorConfig;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Nothing to render; no output is written.
    #[error("no valid measures found in {}", .root.display())]
    NoValidMeasures { root: PathBuf },
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerateResult {
    pub list: ListDefinition,
    pub input_root: PathBuf,
    /// `None` for dry runs.
    pub output_path: Option<PathBuf>,
    pub script: String,
    pub measure_count: usize,
    pub active_count: usize,
    pub skipped: Vec<SkippedFile>,
    /// Default-active ids that matched no measure.
    pub unmatched_defaults: Vec<String>,
}

/// Runs the pipeline for `config`.
///
/// Files that fail to parse or validate are skipped. An input root with no
/// valid measures aborts the run before anything is written.
pub fn run_generate(config: &GeneratorConfig) -> Result<GenerateResult> {
    let span = info_span!("generate", list_id = %config.list.list_id);
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Discovery
    // =========================================================================
    let start = Instant::now();
    let files = list_measure_files(&config.input_root)
        .with_context(|| format!("scan {}", config.input_root.display()))?;
    info!(
        input_root = %config.input_root.display(),
        file_count = files.len(),
        duration_ms = start.elapsed().as_millis(),
        "discovery complete"
    );

    // =========================================================================
    // Stage 2: Extraction & validation
    // =========================================================================
    let extraction = info_span!("extract").in_scope(|| extract_measures(&files));
    if extraction.measures.is_empty() {
        return Err(GenerateError::NoValidMeasures {
            root: config.input_root.clone(),
        }
        .into());
    }

    // =========================================================================
    // Stage 3: Rendering
    // =========================================================================
    let rows = info_span!("render")
        .in_scope(|| render_list(&config.list, &extraction.measures, &config.defaults));
    let script = render_script(&rows);

    let active_count = extraction
        .measures
        .iter()
        .filter(|m| config.defaults.contains(&m.id))
        .count();
    let unmatched_defaults: Vec<String> = config
        .defaults
        .iter()
        .filter(|id| !extraction.measures.iter().any(|m| m.id == *id))
        .map(str::to_string)
        .collect();
    for measure_id in &unmatched_defaults {
        warn!(%measure_id, "default-active id matches no measure");
    }

    // =========================================================================
    // Stage 4: Output
    // =========================================================================
    let output_path = if config.dry_run {
        info!("dry run; script not written");
        None
    } else {
        let path = write_script(&config.output_dir, &config.list, &script)
            .context("write SQL list")?;
        Some(path)
    };

    Ok(GenerateResult {
        list: config.list.clone(),
        input_root: config.input_root.clone(),
        output_path,
        script,
        measure_count: extraction.measures.len(),
        active_count,
        skipped: extraction.skipped,
        unmatched_defaults,
    })
}
