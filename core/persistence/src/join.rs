//! FILENAME: core/persistence/src/join.rs
//! PURPOSE: Inner join of the two source tables into a `Dataset`.
//! CONTEXT: Output rows follow left-table order; for each left row, matching
//! right rows follow right-table order. Keys and categorical fields are
//! trimmed. A column present on both sides is read from the left table.

use crate::{DatasetLoadError, RawTable};
use engine::{Dataset, DatasetBuilder, Dimension, Measure, JOIN_KEY};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Where a required column lives after the join.
#[derive(Debug, Clone, Copy)]
struct ColumnSource {
    side: Side,
    index: usize,
}

fn locate(left: &RawTable, right: &RawTable, column: &str) -> Result<ColumnSource, DatasetLoadError> {
    if let Some(index) = left.column_index(column) {
        return Ok(ColumnSource { side: Side::Left, index });
    }
    if let Some(index) = right.column_index(column) {
        return Ok(ColumnSource { side: Side::Right, index });
    }
    Err(DatasetLoadError::MissingColumn {
        column: column.to_string(),
    })
}

/// Reads a required column for one joined row pair.
fn source_cell<'a>(
    source: ColumnSource,
    left: (&'a RawTable, usize),
    right: (&'a RawTable, usize),
) -> (&'a RawTable, usize, &'a str) {
    let (table, row) = match source.side {
        Side::Left => left,
        Side::Right => right,
    };
    (table, row, table.cell(row, source.index))
}

fn join_key_index(table: &RawTable) -> Result<usize, DatasetLoadError> {
    table
        .column_index(JOIN_KEY)
        .ok_or_else(|| DatasetLoadError::MissingJoinKey {
            table: table.name.clone(),
            key: JOIN_KEY.to_string(),
        })
}

/// Parses a measure cell. Blank reads as zero; thousands separators are ignored.
fn parse_measure(
    text: &str,
    table: &RawTable,
    row: usize,
    measure: Measure,
) -> Result<f64, DatasetLoadError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DatasetLoadError::InvalidMeasure {
            table: table.name.clone(),
            row: row + 1,
            column: measure.column_name().to_string(),
            value: text.to_string(),
        })
}

/// Joins `left` and `right` on `Order ID`.
pub fn join_tables(left: &RawTable, right: &RawTable) -> Result<Dataset, DatasetLoadError> {
    let left_key = join_key_index(left)?;
    let right_key = join_key_index(right)?;

    let dimension_sources = Dimension::ALL
        .iter()
        .map(|d| locate(left, right, d.column_name()))
        .collect::<Result<Vec<_>, _>>()?;
    let measure_sources = Measure::ALL
        .iter()
        .map(|m| locate(left, right, m.column_name()))
        .collect::<Result<Vec<_>, _>>()?;

    // Key -> right row numbers, in right-table order
    let mut right_index: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
    for row in 0..right.len() {
        right_index
            .entry(right.cell(row, right_key).trim())
            .or_default()
            .push(row);
    }

    let mut builder = DatasetBuilder::with_capacity(left.len());

    for left_row in 0..left.len() {
        let key = left.cell(left_row, left_key).trim();
        let Some(matches) = right_index.get(key) else {
            continue;
        };

        for &right_row in matches {
            let mut categories = [""; Dimension::COUNT];
            for (slot, source) in categories.iter_mut().zip(&dimension_sources) {
                *slot = source_cell(*source, (left, left_row), (right, right_row)).2.trim();
            }

            let mut measures = [0.0; Measure::COUNT];
            for ((slot, source), measure) in measures
                .iter_mut()
                .zip(&measure_sources)
                .zip(Measure::ALL)
            {
                let (table, row, text) = source_cell(*source, (left, left_row), (right, right_row));
                *slot = parse_measure(text, table, row, measure)?;
            }

            builder.push_row(key, categories, measures);
        }
    }

    let dataset = builder.finish();
    log::info!(
        target: "LOAD",
        "joined {} ({} rows) with {} ({} rows) into {} records",
        left.name,
        left.len(),
        right.name,
        right.len(),
        dataset.len()
    );
    Ok(dataset)
}
