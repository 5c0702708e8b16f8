//! CSV rendering with the ERP import's quoting rules

use crate::convert::schema::out;
use crate::convert::types::OutputRow;

/// Render header plus rows as CSV text, lines joined by `\n`.
///
/// A field is quoted (internal quotes doubled) when its text contains a
/// comma, double quote, or newline — and always for the return-reason
/// column, which the import expects quoted regardless of content.
pub fn serialize(headers: &[&str], rows: &[OutputRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));

    for row in rows {
        let line = headers
            .iter()
            .map(|header| render_field(header, row))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

fn render_field(column: &str, row: &OutputRow) -> String {
    let text = row
        .get(column)
        .map(|field| field.to_string())
        .unwrap_or_default();

    let must_quote = column == out::RETURN_REASON
        || text.contains(',')
        || text.contains('"')
        || text.contains('\n');

    if must_quote {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}
