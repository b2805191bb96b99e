//! FILENAME: core/engine/src/dataset.rs
//! The immutable joined table.
//!
//! A `Dataset` is built once by a loader through `DatasetBuilder` and is
//! read-only afterwards. Sessions share it behind an `Arc`; since nothing
//! can mutate it after `finish()`, concurrent readers need no locking.
//!
//! Layout:
//! - `records`: rows in load order
//! - `categories`: one unique value store per dimension
//! - `orders`: unique value store for order identifiers

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, Measure};
use crate::intern::{ValueId, ValueStore};
use crate::record::Record;

// ============================================================================
// TOTALS
// ============================================================================

/// Measure sums and distinct order count over some set of records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub amount: f64,
    pub profit: f64,
    pub quantity: f64,
    pub distinct_orders: usize,
}

impl Totals {
    pub fn measure(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Amount => self.amount,
            Measure::Profit => self.profit,
            Measure::Quantity => self.quantity,
        }
    }

    /// Adds a record's measures. The distinct order count is left to the caller.
    pub fn add(&mut self, record: &Record) {
        self.amount += record.measure(Measure::Amount);
        self.profit += record.measure(Measure::Profit);
        self.quantity += record.measure(Measure::Quantity);
    }
}

// ============================================================================
// DATASET
// ============================================================================

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    categories: [ValueStore; Dimension::COUNT],
    orders: ValueStore,
}

impl Dataset {
    /// A dataset with no rows. Used for the "no data" state.
    pub fn empty() -> Self {
        DatasetBuilder::new().finish()
    }

    /// Every record, in load order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// The unique values seen for a dimension.
    pub fn categories(&self, dimension: Dimension) -> &ValueStore {
        &self.categories[dimension.index()]
    }

    /// Resolves a category text to its id, if it occurs in the data.
    pub fn lookup(&self, dimension: Dimension, value: &str) -> Option<ValueId> {
        self.categories[dimension.index()].lookup(value)
    }

    /// Text of a category id.
    pub fn category(&self, dimension: Dimension, id: ValueId) -> Option<&str> {
        self.categories[dimension.index()].get(id)
    }

    /// Text of a record's category for a dimension.
    pub fn category_label(&self, record: &Record, dimension: Dimension) -> &str {
        self.category(dimension, record.category_id(dimension))
            .unwrap_or_default()
    }

    pub fn order_label(&self, record: &Record) -> &str {
        self.orders.get(record.order_id()).unwrap_or_default()
    }

    /// Number of distinct order identifiers in the whole dataset.
    pub fn distinct_orders(&self) -> usize {
        self.orders.len()
    }

    /// Measure sums and distinct order count over every record.
    pub fn global_totals(&self) -> Totals {
        let mut totals = Totals::default();
        for record in &self.records {
            totals.add(record);
        }
        totals.distinct_orders = self.orders.len();
        totals
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Accumulates rows, interning categorical values as they arrive.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    records: Vec<Record>,
    categories: [ValueStore; Dimension::COUNT],
    orders: ValueStore,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rows: usize) -> Self {
        DatasetBuilder {
            records: Vec::with_capacity(rows),
            ..Self::default()
        }
    }

    /// Adds one row. `categories` and `measures` are indexed like
    /// `Dimension::ALL` and `Measure::ALL`.
    pub fn push_row(
        &mut self,
        order_id: &str,
        categories: [&str; Dimension::COUNT],
        measures: [f64; Measure::COUNT],
    ) {
        let order = self.orders.intern(order_id);
        let mut ids = [0 as ValueId; Dimension::COUNT];
        for (i, value) in categories.iter().enumerate() {
            ids[i] = self.categories[i].intern(value);
        }
        self.records.push(Record {
            order,
            categories: ids,
            measures,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(self) -> Dataset {
        Dataset {
            records: self.records,
            categories: self.categories,
            orders: self.orders,
        }
    }
}
