//! FILENAME: core/persistence/tests/test_load.rs
//! Integration tests for loading and joining source files.

use engine::{Dimension, Measure};
use persistence::{load, load_table, DatasetLoadError};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// FIXTURES
// ============================================================================

const DETAILS_CSV: &str = "\
Order ID,Amount,Profit,Quantity,Category,Sub-Category,PaymentMode
B-25601,1275,-1148,7,Furniture,Bookcases,COD
B-25601,66,-12,5,Clothing, Stole ,COD
B-25602,168,-111,2,Electronics,Phones,UPI
B-25603,424,-272,5,Electronics,Phones,EMI
";

const ORDERS_CSV: &str = "\
Order ID,Order Date,Customer Name,State,City
B-25601,01-04-2018,Bharat,Gujarat,Ahmedabad
B-25602,01-04-2018,Pearl,Maharashtra,Pune
B-25603,03-04-2018,Jahan,Madhya Pradesh,Bhopal
";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn write_orders_xlsx(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let headers = ["Order ID", "Order Date", "CustomerName", "State", "City"];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    let rows = [
        ["B-25601", "01-04-2018", "Bharat", "Gujarat", "Ahmedabad"],
        ["B-25602", "01-04-2018", "Pearl", "Maharashtra", "Pune"],
    ];
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_string((r + 1) as u32, col as u16, *value)
                .unwrap();
        }
    }
    workbook.save(path).unwrap();
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_load_csv_pair() {
    let dir = TempDir::new().unwrap();
    let details = write(&dir, "Details.csv", DETAILS_CSV);
    let orders = write(&dir, "Orders.csv", ORDERS_CSV);

    let dataset = load(&details, &orders).unwrap();

    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.distinct_orders(), 3);

    let totals = dataset.global_totals();
    assert_eq!(totals.amount, 1275.0 + 66.0 + 168.0 + 424.0);
    assert_eq!(totals.quantity, 19.0);

    let second = dataset.get(1).unwrap();
    assert_eq!(dataset.category_label(second, Dimension::SubCategory), "Stole");
    assert_eq!(dataset.category_label(second, Dimension::CustomerName), "Bharat");
    assert_eq!(second.measure(Measure::Profit), -12.0);
}

#[test]
fn test_load_csv_with_xlsx_orders() {
    let dir = TempDir::new().unwrap();
    let details = write(&dir, "Details.csv", DETAILS_CSV);
    let orders = dir.path().join("Orders.xlsx");
    write_orders_xlsx(&orders);

    let dataset = load(&details, &orders).unwrap();

    // B-25603 has no order row in the workbook
    assert_eq!(dataset.len(), 3);
    assert!(dataset.lookup(Dimension::State, "Madhya Pradesh").is_none());
}

#[test]
fn test_missing_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let details = write(&dir, "Details.csv", DETAILS_CSV);
    let orders = dir.path().join("Orders.csv");

    let err = load(&details, &orders).unwrap_err();
    assert!(matches!(err, DatasetLoadError::MissingSource(p) if p == orders));
}

#[test]
fn test_missing_join_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    let details = write(&dir, "Details.csv", DETAILS_CSV);
    let orders = write(&dir, "Orders.csv", "Order,State\nB-25601,Gujarat\n");

    let err = load(&details, &orders).unwrap_err();
    assert!(matches!(err, DatasetLoadError::MissingJoinKey { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "Orders.json", "[]");

    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, DatasetLoadError::UnsupportedFormat(ext) if ext == "json"));
}
