//! Escaping for values embedded in generated SQL.
//!
//! Notes are displayed as HTML by the consuming application, so they are
//! escaped twice: first as HTML text, then as a SQL string literal.

use html_escape::encode_quoted_attribute;

/// Entity written for `'` in notes.
const APOSTROPHE_ENTITY: &str = "&#39;";

/// Line break inserted into notes in place of `\n`.
pub const NOTES_LINE_BREAK: &str = "<br>";

/// Escapes `value` for a single-quoted MySQL string literal.
///
/// Backslashes are doubled and single quotes become `\'`.
pub fn sql_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a measure description for the `notes` column.
///
/// `&`, `<`, `>`, `"` and `'` become HTML entities (`'` as the decimal
/// `&#39;`), newlines become [`NOTES_LINE_BREAK`], and the result is
/// SQL-literal escaped.
pub fn html_notes(value: &str) -> String {
    // Any `&` from the input is already `&amp;`, so only encoder output matches.
    let html = encode_quoted_attribute(value)
        .replace("&#x27;", APOSTROPHE_ENTITY)
        .replace('\n', NOTES_LINE_BREAK);
    sql_literal(&html)
}
