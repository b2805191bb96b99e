//! FILENAME: core/persistence/src/table.rs
//! PURPOSE: Neutral tabular form shared by the CSV and XLSX readers.
//! CONTEXT: Headers are normalised on construction so raw-export spellings
//! ("Sub Category", "Customer Name") resolve to canonical column names.

use engine::Dimension;

/// A header row plus text rows, exactly as read from a source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Display name used in error messages (usually the file name).
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable {
            name: name.into(),
            headers: headers.iter().map(|h| normalize_header(h)).collect(),
            rows,
        }
    }

    /// Index of a column by canonical name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text, or "" when the row is shorter than the header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Trims a header and maps dimension aliases to the canonical name.
pub fn normalize_header(header: &str) -> String {
    let trimmed = header.trim().trim_start_matches('\u{feff}');
    match Dimension::from_column_name(trimmed) {
        Some(dimension) => dimension.column_name().to_string(),
        None => trimmed.to_string(),
    }
}
