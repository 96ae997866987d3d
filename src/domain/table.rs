// ============================================================
// TABLE
// ============================================================
// In-memory result of loading a delimited file

use std::collections::HashMap;

use super::cell_formats::CellFormats;

/// One data row: raw cell text in header column order.
/// Rows may be shorter or longer than the header.
pub type Row = Vec<String>;

/// Header index plus ordered rows of raw text cells.
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column name -> zero-based position. Last occurrence wins on duplicates.
    column_index: HashMap<String, usize>,

    /// Data rows in file order (header excluded)
    rows: Vec<Row>,

    /// Patterns used by the date/time getters
    formats: CellFormats,
}

impl Table {
    /// Build a table from a header record and its data rows
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let mut column_index = HashMap::with_capacity(headers.len());
        for (position, name) in headers.into_iter().enumerate() {
            column_index.insert(name, position);
        }

        Self {
            column_index,
            rows,
            formats: CellFormats::default(),
        }
    }

    /// Replace the date/time patterns used by the typed getters
    pub fn with_formats(mut self, formats: CellFormats) -> Self {
        self.formats = formats;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_index.len()
    }

    /// True when there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    /// Known column names ordered by position
    pub fn column_names(&self) -> Vec<&str> {
        self.columns().into_iter().map(|(name, _)| name).collect()
    }

    /// (name, position) pairs ordered by position
    pub(crate) fn columns(&self) -> Vec<(&str, usize)> {
        let mut columns: Vec<(&str, usize)> = self
            .column_index
            .iter()
            .map(|(name, &position)| (name.as_str(), position))
            .collect();
        columns.sort_by_key(|&(_, position)| position);
        columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn formats(&self) -> &CellFormats {
        &self.formats
    }
}
