//! `list_options` INSERT statements.

use ecqm_model::{LISTS_KEY, ListOption};

/// Target table, quoted for MySQL.
pub const LIST_OPTIONS_TABLE: &str = "`list_options`";

const HEADER_COLUMNS: &str =
    "(`list_id`, `option_id`, `title`, `seq`, `is_default`, `option_value`, `notes`)";
const MEASURE_COLUMNS: &str = "(`list_id`, `option_id`, `title`, `seq`, `activity`, `notes`)";

/// Builds the INSERT statement for one row.
///
/// Field values are embedded as given; callers escape them first.
pub fn insert_statement(option: &ListOption) -> String {
    match option {
        ListOption::Header { list_id, title } => format!(
            "INSERT INTO {LIST_OPTIONS_TABLE} {HEADER_COLUMNS} VALUES \
             ('{LISTS_KEY}','{list_id}','{title}',0,1,0, '');"
        ),
        ListOption::Measure {
            list_id,
            option_id,
            title,
            seq,
            activity,
            notes,
        } => format!(
            "INSERT INTO {LIST_OPTIONS_TABLE} {MEASURE_COLUMNS} VALUES \
             ('{list_id}','{option_id}','{title}',{seq},{activity},'{notes}');",
            activity = activity.flag()
        ),
    }
}
