//! Error types for measure ingestion.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or reading descriptor files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input directory missing or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// File is not valid JSON or does not have the expected shape.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an object.
    #[error("expected a JSON object in {path}, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },

    // === Lookup Errors ===
    /// No descriptor exists for the requested measure.
    #[error("measure {measure} not found under {root}")]
    MeasureNotFound { measure: String, root: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Why a parsed descriptor was excluded from the measure list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingId,
    MissingTitle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingId => f.write_str("missing cms_id/id"),
            SkipReason::MissingTitle => f.write_str("missing title"),
        }
    }
}
