use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A validated measure read from one descriptor file.
///
/// `id` and `title` are guaranteed non-blank; `description` is empty when
/// the descriptor carried none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureRecord {
    /// External measure identifier, e.g. `CMS122v12`.
    pub id: String,
    /// Human-readable measure name.
    pub title: String,
    /// Free-text description, raw (unescaped).
    #[serde(default)]
    pub description: String,
    /// Descriptor file this record was read from.
    pub source: PathBuf,
}

impl MeasureRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            source: source.into(),
        }
    }
}

/// Measure ids the downstream application pre-selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultSet {
    ids: BTreeSet<String>,
}

impl DefaultSet {
    /// Parse a comma-separated id list. Entries are trimmed and blanks dropped.
    pub fn parse(value: &str) -> Self {
        value.split(',').map(str::trim).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for DefaultSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let ids = iter
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        Self { ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_parse_trims_and_drops_blanks() {
        let set = DefaultSet::parse(" CMS122v12, ,CMS165v12,,");
        assert_eq!(set.len(), 2);
        assert!(set.contains("CMS122v12"));
        assert!(set.contains("CMS165v12"));
        assert!(!set.contains(""));
    }

    #[test]
    fn default_set_empty_input() {
        assert!(DefaultSet::parse("").is_empty());
    }
}
