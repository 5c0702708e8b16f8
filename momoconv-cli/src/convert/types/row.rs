//! Source row representation

use std::collections::HashMap;

use super::{Cell, Field};

static EMPTY: Cell = Cell::Empty;

/// One decoded data row, keyed by the header text of row 1.
///
/// Keys are not guaranteed present across rows; absent keys behave as empty
/// cells. Immutable once the reader has produced it.
#[derive(Debug, Clone, Default)]
pub struct SourceRow {
    fields: HashMap<String, Cell>,
}

impl SourceRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, cell: Cell) {
        self.fields.insert(name.into(), cell);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a cell by header name; absent keys resolve to an empty cell.
    pub fn get(&self, name: &str) -> &Cell {
        self.fields.get(name).unwrap_or(&EMPTY)
    }

    /// Text form of a cell, or the empty string when the cell is falsy.
    pub fn text(&self, name: &str) -> String {
        let cell = self.get(name);
        if cell.is_falsy() {
            String::new()
        } else {
            cell.to_string()
        }
    }

    /// Scalar form of a cell for numeric target columns: numbers pass
    /// through as numbers, non-empty text passes through as text, and
    /// anything falsy defaults to zero.
    pub fn scalar_or_zero(&self, name: &str) -> Field {
        match self.get(name) {
            cell if cell.is_falsy() => Field::Number(0.0),
            Cell::Number(n) => Field::Number(*n),
            cell => Field::Text(cell.to_string()),
        }
    }
}

impl FromIterator<(String, Cell)> for SourceRow {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        SourceRow {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SourceRow {
        let mut row = SourceRow::new();
        row.insert("品名", Cell::Text("Lipstick".into()));
        row.insert("售價(含稅)", Cell::Number(100.0));
        row.insert("數量", Cell::Number(0.0));
        row
    }

    #[test]
    fn test_absent_key_is_empty_cell() {
        assert_eq!(row().get("不存在"), &Cell::Empty);
        assert_eq!(row().text("不存在"), "");
    }

    #[test]
    fn test_text_of_falsy_cell_is_empty() {
        assert_eq!(row().text("數量"), "");
        assert_eq!(row().text("品名"), "Lipstick");
    }

    #[test]
    fn test_scalar_defaults_to_zero() {
        assert_eq!(row().scalar_or_zero("售價(含稅)"), Field::Number(100.0));
        assert_eq!(row().scalar_or_zero("數量"), Field::Number(0.0));
        assert_eq!(row().scalar_or_zero("不存在"), Field::Number(0.0));
    }

    #[test]
    fn test_scalar_passes_text_through() {
        let mut row = SourceRow::new();
        row.insert("售價(含稅)", Cell::Text("N/A".into()));
        assert_eq!(row.scalar_or_zero("售價(含稅)"), Field::Text("N/A".into()));
    }
}
