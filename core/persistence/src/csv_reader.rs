//! FILENAME: core/persistence/src/csv_reader.rs

use crate::{DatasetLoadError, RawTable};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<RawTable, DatasetLoadError> {
    if !path.is_file() {
        return Err(DatasetLoadError::MissingSource(path.to_path_buf()));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    read_csv(File::open(path)?, &name)
}

/// Reads CSV text from any reader. Ragged rows are an error.
pub fn read_csv<R: Read>(reader: R, name: &str) -> Result<RawTable, DatasetLoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(String::from).collect());
    }

    log::debug!(target: "LOAD", "read {} rows from {}", rows.len(), name);
    Ok(RawTable::new(name, headers, rows))
}
