//! FILENAME: core/crossfilter-engine/src/kpi.rs
//! KPI Engine - headline totals under the full filter state.
//!
//! KPIs apply every active filter; no dimension is excluded. With an empty
//! state the result equals `Dataset::global_totals()`.

use engine::{Dataset, Measure, Totals};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::engine::{filter_records, Selection};
use crate::filter::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiResult {
    #[serde(flatten)]
    pub totals: Totals,
    /// Number of joined records behind the totals.
    pub record_count: usize,
}

impl KpiResult {
    pub fn total_amount(&self) -> f64 {
        self.totals.amount
    }

    pub fn total_profit(&self) -> f64 {
        self.totals.profit
    }

    pub fn total_quantity(&self) -> f64 {
        self.totals.quantity
    }

    pub fn distinct_orders(&self) -> usize {
        self.totals.distinct_orders
    }

    pub fn measure(&self, measure: Measure) -> f64 {
        self.totals.measure(measure)
    }
}

/// Sums and distinct order count over a selection.
pub fn totals_of(selection: &Selection<'_>) -> Totals {
    let mut totals = Totals::default();
    let mut orders = FxHashSet::default();
    for record in selection.iter() {
        totals.add(record);
        orders.insert(record.order_id());
    }
    totals.distinct_orders = orders.len();
    totals
}

pub fn compute_kpis(dataset: &Dataset, state: &FilterState) -> KpiResult {
    let selection = filter_records(dataset, state, None);
    let totals = totals_of(&selection);

    log::debug!(
        target: "KPI",
        "{} records, {} orders, amount={}",
        selection.len(),
        totals.distinct_orders,
        totals.amount
    );

    KpiResult {
        totals,
        record_count: selection.len(),
    }
}
