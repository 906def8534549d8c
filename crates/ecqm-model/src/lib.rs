//! Data model for eCQM list generation.

pub mod error;
pub mod list;
pub mod measure;

pub use error::{ModelError, Result};
pub use list::{Activity, LISTS_KEY, ListDefinition, ListOption, SEQ_STEP, measure_seq};
pub use measure::{DefaultSet, MeasureRecord};
