//! SQL output for eCQM measure lists.
//!
//! - **escape**: SQL-literal and HTML notes escaping
//! - **statement**: one `list_options` INSERT per row
//! - **render**: header and measure rows, script assembly
//! - **output**: writing `<list_id>.sql`

mod error;
pub mod escape;
mod output;
mod render;
mod statement;

pub use error::{ReportError, Result};
pub use escape::{html_notes, sql_literal};
pub use output::{script_path, write_script};
pub use render::{render_list, render_script};
pub use statement::{LIST_OPTIONS_TABLE, insert_statement};
