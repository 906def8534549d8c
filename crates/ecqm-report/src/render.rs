//! Rendering validated measures into list option rows.

use ecqm_model::{Activity, DefaultSet, ListDefinition, ListOption, MeasureRecord, measure_seq};
use tracing::info;

use crate::escape::{html_notes, sql_literal};
use crate::statement::insert_statement;

/// Builds the header row followed by one row per measure, in input order.
pub fn render_list(
    list: &ListDefinition,
    measures: &[MeasureRecord],
    defaults: &DefaultSet,
) -> Vec<ListOption> {
    let list_id = sql_literal(&list.list_id);
    let mut rows = Vec::with_capacity(measures.len() + 1);
    rows.push(ListOption::Header {
        list_id: list_id.clone(),
        title: sql_literal(&list.list_title),
    });

    for (position, measure) in measures.iter().enumerate() {
        let seq = measure_seq(position);
        let activity = Activity::from_default(defaults.contains(&measure.id));
        info!(
            measure_id = %measure.id,
            title = %measure.title,
            seq,
            active = activity.flag(),
            "measure added"
        );
        rows.push(ListOption::Measure {
            list_id: list_id.clone(),
            option_id: sql_literal(&measure.id),
            title: sql_literal(&measure.title),
            seq,
            activity,
            notes: html_notes(&measure.description),
        });
    }

    rows
}

/// Joins row statements into a script, one per line, with a trailing newline.
pub fn render_script(rows: &[ListOption]) -> String {
    let mut script = String::new();
    for row in rows {
        script.push_str(&insert_statement(row));
        script.push('\n');
    }
    script
}
