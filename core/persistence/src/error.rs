//! FILENAME: core/persistence/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Fatal ingestion failure. No partial dataset is ever produced.
#[derive(Error, Debug)]
pub enum DatasetLoadError {
    #[error("Data source not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Join key '{key}' missing from {table}")]
    MissingJoinKey { table: String, key: String },

    #[error("Column '{column}' missing from joined data")]
    MissingColumn { column: String },

    #[error("Invalid {column} value '{value}' in {table} row {row}")]
    InvalidMeasure {
        table: String,
        row: usize,
        column: String,
        value: String,
    },
}
