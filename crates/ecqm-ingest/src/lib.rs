pub mod discovery;
pub mod error;
pub mod extract;
pub mod lookup;

pub use discovery::{VALUE_SETS_FILE, is_value_set_sidecar, list_measure_files};
pub use error::{IngestError, Result, SkipReason};
pub use extract::{Extraction, MeasureDescriptor, SkippedFile, extract_measures, read_descriptor};
pub use lookup::{MeasurePackage, load_measure_package};
