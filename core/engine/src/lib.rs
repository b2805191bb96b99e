//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the dashboard data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod dataset;
pub mod dimension;
pub mod intern;
pub mod number_format;
pub mod record;

// Re-export commonly used types at the crate root
pub use dataset::{Dataset, DatasetBuilder, Totals};
pub use dimension::{Dimension, Measure, UnknownDimension, UnknownMeasure, JOIN_KEY};
pub use intern::{ValueId, ValueStore};
pub use number_format::{format_currency, format_decimal, format_number, NumberFormat};
pub use record::Record;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn it_shares_dataset_across_threads() {
        let mut builder = DatasetBuilder::new();
        builder.push_row("O-1", ["Art", "Office", "Goa", "Panaji", "Mia", "UPI"], [10.0, 1.0, 1.0]);
        let dataset = Arc::new(builder.finish());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dataset = Arc::clone(&dataset);
                std::thread::spawn(move || dataset.global_totals().amount)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 10.0);
        }
    }
}
