//! FILENAME: core/persistence/src/xlsx_reader.rs

use crate::{DatasetLoadError, RawTable};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Reads one worksheet (the named one, or the first) as a table whose first
/// row is the header.
pub fn load_xlsx(path: &Path, sheet: Option<&str>) -> Result<RawTable, DatasetLoadError> {
    if !path.is_file() {
        return Err(DatasetLoadError::MissingSource(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| DatasetLoadError::SheetNotFound(name.to_string()))?,
        None => sheet_names.first().cloned().ok_or_else(|| {
            DatasetLoadError::SheetNotFound("workbook contains no sheets".to_string())
        })?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.collect();

    log::debug!(
        target: "LOAD",
        "read {} rows from {}[{}]",
        rows.len(),
        path.display(),
        sheet_name
    );

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(RawTable::new(name, headers, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => format_float(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Whole floats print without a decimal point so ids like `1001` stay keys.
fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}
