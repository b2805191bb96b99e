//! FILENAME: core/persistence/src/lib.rs
//! Dashboard Persistence Module
//!
//! Loads the two source tables (CSV or XLSX), joins them on `Order ID`
//! and produces the immutable `Dataset` every session reads from.

mod csv_reader;
mod error;
mod join;
mod table;
mod xlsx_reader;

pub use csv_reader::{load_csv, read_csv};
pub use error::DatasetLoadError;
pub use join::join_tables;
pub use table::{normalize_header, RawTable};
pub use xlsx_reader::load_xlsx;

use engine::Dataset;
use std::path::Path;

/// Reads a single source table, choosing the reader by file extension.
pub fn load_table(path: &Path) -> Result<RawTable, DatasetLoadError> {
    if !path.exists() {
        return Err(DatasetLoadError::MissingSource(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => load_csv(path),
        "xlsx" | "xlsm" => load_xlsx(path, None),
        other => Err(DatasetLoadError::UnsupportedFormat(other.to_string())),
    }
}

/// Loads both sources and joins them. Any failure is fatal; no partial
/// dataset is returned.
pub fn load(source_a: &Path, source_b: &Path) -> Result<Dataset, DatasetLoadError> {
    let left = load_table(source_a)?;
    let right = load_table(source_b)?;
    join_tables(&left, &right)
}
