//! Descriptor parsing and validation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ecqm_model::MeasureRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result, SkipReason};

/// Measure fields as they appear in a descriptor file, before validation.
///
/// Every field is optional here; [`MeasureDescriptor::validate`] is the only
/// place the required fields are checked. Non-string scalars are read as
/// their JSON text, other value kinds as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasureDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub cms_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl MeasureDescriptor {
    /// Reads the descriptor fields from a JSON object.
    ///
    /// Returns `None` for any other top-level value; a derived struct
    /// deserializer would otherwise accept arrays positionally.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Self::deserialize(value).ok(),
            _ => None,
        }
    }

    /// Identifier of the measure: `cms_id`, falling back to `id`.
    pub fn measure_id(&self) -> Option<&str> {
        non_blank(self.cms_id.as_deref()).or_else(|| non_blank(self.id.as_deref()))
    }

    /// Check required fields and build a typed record.
    pub fn validate(self, source: &Path) -> std::result::Result<MeasureRecord, SkipReason> {
        let id = self.measure_id().ok_or(SkipReason::MissingId)?.to_string();
        let title = non_blank(self.title.as_deref())
            .ok_or(SkipReason::MissingTitle)?
            .to_string();
        Ok(MeasureRecord {
            id,
            title,
            description: self.description.unwrap_or_default(),
            source: source.to_path_buf(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Parse JSON text without serde_json's nesting limit.
///
/// Measure exports embed their logic trees and routinely nest deeper than
/// the default limit of 128.
pub(crate) fn parse_unbounded<T>(text: &str) -> serde_json::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses one descriptor file.
pub fn read_descriptor(path: &Path) -> Result<MeasureDescriptor> {
    let text = read_to_string(path)?;
    let value: Value = parse_unbounded(&text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    MeasureDescriptor::from_value(&value).ok_or_else(|| IngestError::NotAnObject {
        path: path.to_path_buf(),
        found: json_kind(&value),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A descriptor that contributed no measure, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Output of the extraction stage.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Valid measures, in the order their files were given.
    pub measures: Vec<MeasureRecord>,
    pub skipped: Vec<SkippedFile>,
}

impl Extraction {
    /// Ids appearing on more than one measure, with their occurrence count.
    pub fn duplicate_ids(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for measure in &self.measures {
            *counts.entry(measure.id.as_str()).or_default() += 1;
        }
        counts.retain(|_, count| *count > 1);
        counts
    }
}

/// Parses and validates every descriptor in `paths`, preserving order.
///
/// Unreadable, malformed, and incomplete descriptors are logged and
/// recorded in [`Extraction::skipped`]; they never abort the stage.
pub fn extract_measures(paths: &[PathBuf]) -> Extraction {
    let mut extraction = Extraction::default();

    for path in paths {
        let descriptor = match read_descriptor(path) {
            Ok(descriptor) => descriptor,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to process descriptor");
                extraction.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: error.to_string(),
                });
                continue;
            }
        };
        match descriptor.validate(path) {
            Ok(record) => {
                debug!(path = %path.display(), measure_id = %record.id, "measure extracted");
                extraction.measures.push(record);
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "skipping incomplete descriptor");
                extraction.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: reason.to_string(),
                });
            }
        }
    }

    for (measure_id, count) in extraction.duplicate_ids() {
        warn!(%measure_id, count, "measure id appears in more than one descriptor");
    }
    info!(
        file_count = paths.len(),
        measure_count = extraction.measures.len(),
        skipped_count = extraction.skipped.len(),
        "extraction complete"
    );
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(json: &str) -> MeasureDescriptor {
        MeasureDescriptor::from_value(&parse_unbounded::<Value>(json).unwrap()).unwrap()
    }

    #[test]
    fn test_cms_id_preferred_over_id() {
        let d = descriptor(r#"{"cms_id": "CMS2v13", "id": "abc", "title": "T"}"#);
        assert_eq!(d.measure_id(), Some("CMS2v13"));
    }

    #[test]
    fn test_id_fallback() {
        let d = descriptor(r#"{"id": "CMS2v13", "title": "T"}"#);
        assert_eq!(d.measure_id(), Some("CMS2v13"));
        let d = descriptor(r#"{"cms_id": " ", "id": "CMS2v13", "title": "T"}"#);
        assert_eq!(d.measure_id(), Some("CMS2v13"));
    }

    #[test]
    fn test_validate_missing_fields() {
        let source = Path::new("m.json");
        let err = descriptor(r#"{"title": "T"}"#).validate(source).unwrap_err();
        assert_eq!(err, SkipReason::MissingId);
        let err = descriptor(r#"{"cms_id": "CMS2v13", "title": ""}"#)
            .validate(source)
            .unwrap_err();
        assert_eq!(err, SkipReason::MissingTitle);
        let err = descriptor(r#"{"cms_id": "CMS2v13", "title": null}"#)
            .validate(source)
            .unwrap_err();
        assert_eq!(err, SkipReason::MissingTitle);
    }

    #[test]
    fn test_validate_defaults_description() {
        let record = descriptor(r#"{"cms_id": "CMS2v13", "title": "T", "description": null}"#)
            .validate(Path::new("m.json"))
            .unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.source, PathBuf::from("m.json"));
    }

    #[test]
    fn test_lenient_scalars() {
        let d = descriptor(r#"{"cms_id": 122, "title": {"text": "T"}, "extra": [1, 2]}"#);
        assert_eq!(d.cms_id.as_deref(), Some("122"));
        assert_eq!(d.title, None);
    }

    #[test]
    fn test_deep_nesting_accepted() {
        let depth = 500;
        let json = format!(
            r#"{{"cms_id": "CMS2v13", "title": "T", "logic": {}{}}}"#,
            "[".repeat(depth),
            "]".repeat(depth)
        );
        let d = descriptor(&json);
        assert_eq!(d.measure_id(), Some("CMS2v13"));
    }

    #[test]
    fn test_non_object_values_rejected() {
        for json in [r#"["M9", null, "Array Title"]"#, "[1, 2]", r#""M9""#, "null"] {
            let value: Value = parse_unbounded(json).unwrap();
            assert!(MeasureDescriptor::from_value(&value).is_none(), "{json}");
        }
    }

    #[test]
    fn test_read_descriptor_array_is_not_an_object() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("arr.json");
        fs::write(&path, r#"["M9", null, "Array Title"]"#).unwrap();

        let err = read_descriptor(&path).unwrap_err();
        assert!(matches!(err, IngestError::NotAnObject { found: "array", .. }));
        assert_eq!(
            err.to_string(),
            format!("expected a JSON object in {}, found array", path.display())
        );
    }
}
