use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ecqm_cli::pipeline::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    println!("List: {}", result.list);
    println!("Input: {}", result.input_root.display());
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("List id"),
        header_cell("Measures"),
        header_cell("Default active"),
        header_cell("Skipped files"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&result.list.list_id)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(result.measure_count),
        count_cell(result.active_count, Color::Green),
        count_cell(result.skipped.len(), Color::Yellow),
    ]);
    println!("{table}");

    print_skipped_table(result);
    if !result.unmatched_defaults.is_empty() {
        eprintln!("Default ids with no matching measure:");
        for id in &result.unmatched_defaults {
            eprintln!("- {id}");
        }
    }
}

fn print_skipped_table(result: &GenerateResult) {
    if result.skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for skipped in &result.skipped {
        table.add_row(vec![
            Cell::new(skipped.path.display()),
            Cell::new(&skipped.reason).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Skipped:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
