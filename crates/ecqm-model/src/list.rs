use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Key the header row is filed under in `list_options`.
pub const LISTS_KEY: &str = "lists";

/// Gap between consecutive measure sequence numbers.
pub const SEQ_STEP: u32 = 10;

/// Identity of the generated list option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDefinition {
    /// Slug used as the SQL list key and the output file stem.
    pub list_id: String,
    /// Display label for the header row.
    pub list_title: String,
}

impl ListDefinition {
    pub fn new(list_id: impl Into<String>, list_title: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            list_title: list_title.into(),
        }
    }

    /// Identity derived from a reporting-period year.
    pub fn for_year(year: u16) -> Self {
        Self::new(default_list_id(year), default_list_title(year))
    }

    /// Resolve list identity from explicit overrides and an optional year.
    ///
    /// Explicit values win. Missing values are derived from `year`; when a
    /// value is missing and no year is available, nothing is derived and
    /// the error names every missing value. Blank overrides count as missing.
    /// An explicit id that is not a plain file stem is rejected.
    pub fn resolve(
        list_id: Option<&str>,
        list_title: Option<&str>,
        year: Option<u16>,
    ) -> Result<Self> {
        let list_id = list_id.map(str::trim).filter(|v| !v.is_empty());
        let list_title = list_title.map(str::trim).filter(|v| !v.is_empty());
        if let Some(id) = list_id {
            check_list_id(id)?;
        }

        if let (Some(id), Some(title)) = (list_id, list_title) {
            return Ok(Self::new(id, title));
        }

        let Some(year) = year else {
            let mut missing = Vec::new();
            if list_id.is_none() {
                missing.push("id");
            }
            if list_title.is_none() {
                missing.push("title");
            }
            return Err(ModelError::IdentityUnresolved { missing });
        };

        Ok(Self::new(
            list_id.map_or_else(|| default_list_id(year), str::to_string),
            list_title.map_or_else(|| default_list_title(year), str::to_string),
        ))
    }

    /// File name of the generated script.
    pub fn file_name(&self) -> String {
        format!("{}.sql", self.list_id)
    }
}

impl fmt::Display for ListDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.list_id, self.list_title)
    }
}

/// The id doubles as the output file stem.
fn check_list_id(list_id: &str) -> Result<()> {
    if list_id.contains(['/', '\\']) || list_id.contains("..") {
        return Err(ModelError::InvalidListId {
            list_id: list_id.to_string(),
        });
    }
    Ok(())
}

fn default_list_id(year: u16) -> String {
    format!("ecqm_{year}_reporting")
}

fn default_list_title(year: u16) -> String {
    format!("eCQM {year} Performance Period")
}

/// One row of the generated script.
///
/// String fields hold values that are already escaped for embedding in a
/// single-quoted SQL literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOption {
    /// The list itself, filed under [`LISTS_KEY`].
    Header { list_id: String, title: String },
    /// One selectable measure.
    Measure {
        list_id: String,
        option_id: String,
        title: String,
        seq: u32,
        activity: Activity,
        notes: String,
    },
}

impl ListOption {
    pub fn seq(&self) -> u32 {
        match self {
            ListOption::Header { .. } => 0,
            ListOption::Measure { seq, .. } => *seq,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, ListOption::Header { .. })
    }
}

/// Sequence number for the measure at `position` (0-based).
pub fn measure_seq(position: usize) -> u32 {
    u32::try_from(position + 1).map_or(u32::MAX, |n| n.saturating_mul(SEQ_STEP))
}

/// Whether a measure is pre-selected downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Inactive,
    Active,
}

impl Activity {
    pub fn from_default(is_default: bool) -> Self {
        if is_default {
            Activity::Active
        } else {
            Activity::Inactive
        }
    }

    /// Column value stored in `list_options.activity`.
    pub fn flag(self) -> u8 {
        match self {
            Activity::Inactive => 0,
            Activity::Active => 1,
        }
    }
}
