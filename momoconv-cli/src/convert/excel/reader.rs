//! Decode vendor .xlsx exports into source rows

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, DataType, Reader, Xlsx, open_workbook};

use crate::convert::types::{Cell, SourceRow};

/// Read the first worksheet of an export into source rows.
///
/// Row 1 is the header row; each later row becomes a `SourceRow` of its
/// non-empty cells keyed by header text. Rows with no values at all are
/// skipped, the way the original back-office export tooling behaves.
pub fn read_order_rows(path: &Path) -> Result<Vec<SourceRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Excel file has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut source_row = SourceRow::new();
        for (header, data) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue; // Unnamed column
            }
            let cell = decode_cell(data);
            if cell == Cell::Empty {
                continue;
            }
            source_row.insert(header.clone(), cell);
        }
        if source_row.is_empty() {
            continue;
        }
        rows.push(source_row);
    }

    log::info!("Read {} data rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn header_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn decode_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => {
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) => data
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cell_typing() {
        assert_eq!(decode_cell(&Data::Empty), Cell::Empty);
        assert_eq!(decode_cell(&Data::String("x".into())), Cell::Text("x".into()));
        assert_eq!(decode_cell(&Data::String("".into())), Cell::Empty);
        assert_eq!(decode_cell(&Data::Float(1.5)), Cell::Number(1.5));
        assert_eq!(decode_cell(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(decode_cell(&Data::Bool(true)), Cell::Bool(true));
    }

    #[test]
    fn test_header_text_is_trimmed() {
        assert_eq!(header_text(&Data::String(" 訂單編號 ".into())), "訂單編號");
        assert_eq!(header_text(&Data::Empty), "");
    }
}
