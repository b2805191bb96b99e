//! FILENAME: core/crossfilter-engine/src/engine.rs
//! Filtering and aggregation.
//!
//! `filter_records` applies every selection in a `FilterState` except the
//! optionally excluded dimension. Rendering dimension D's chart excludes D,
//! so D's own selection never narrows D's chart while selections on other
//! dimensions still do. KPIs exclude nothing.
//!
//! `aggregate` groups a selection by one dimension, sums one measure, sorts
//! by value descending with ties broken by category ascending, then
//! truncates to an optional limit.

use std::cmp::Ordering;

use engine::{Dataset, Dimension, Measure, Record, ValueId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::filter::FilterState;

// ============================================================================
// SELECTION
// ============================================================================

/// The records that survive filtering, borrowed from their dataset.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    dataset: &'a Dataset,
    records: Vec<&'a Record>,
}

impl<'a> Selection<'a> {
    /// Every record of the dataset.
    pub fn all(dataset: &'a Dataset) -> Self {
        Selection {
            dataset,
            records: dataset.all().iter().collect(),
        }
    }

    pub fn empty(dataset: &'a Dataset) -> Self {
        Selection {
            dataset,
            records: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of a measure over the selected records.
    pub fn sum(&self, measure: Measure) -> f64 {
        self.iter().map(|r| r.measure(measure)).sum()
    }
}

// ============================================================================
// FILTERING ENGINE
// ============================================================================

/// Applies `state` to `dataset`, skipping the predicate on `exclude`.
/// Predicates are ANDed.
pub fn filter_records<'a>(
    dataset: &'a Dataset,
    state: &FilterState,
    exclude: Option<Dimension>,
) -> Selection<'a> {
    let mut predicates: SmallVec<[(Dimension, ValueId); 4]> = SmallVec::new();

    for (dimension, value) in state.iter() {
        if Some(dimension) == exclude {
            continue;
        }
        match dataset.lookup(dimension, value) {
            Some(id) => predicates.push((dimension, id)),
            None => {
                // A value absent from the data matches nothing
                log::debug!(
                    target: "FILTER",
                    "{}='{}' not in dataset, selection is empty",
                    dimension,
                    value
                );
                return Selection::empty(dataset);
            }
        }
    }

    if predicates.is_empty() {
        return Selection::all(dataset);
    }

    let records: Vec<&Record> = dataset
        .all()
        .iter()
        .filter(|record| {
            predicates
                .iter()
                .all(|&(dimension, id)| record.category_id(dimension) == id)
        })
        .collect();

    log::trace!(
        target: "FILTER",
        "{} predicates (exclude={:?}) kept {}/{} records",
        predicates.len(),
        exclude,
        records.len(),
        dataset.len()
    );

    Selection { dataset, records }
}

// ============================================================================
// AGGREGATION ENGINE
// ============================================================================

/// One (category, aggregated value) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub category: String,
    pub value: f64,
}

/// Ranked buckets for one dimension and measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub dimension: Dimension,
    pub measure: Measure,
    pub buckets: Vec<Bucket>,
    /// Number of groups before truncation.
    pub category_count: usize,
}

impl AggregationResult {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.buckets.len() < self.category_count
    }

    /// Sum of the bucket values that were kept.
    pub fn total(&self) -> f64 {
        self.buckets.iter().map(|b| b.value).sum()
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.value)
    }

    /// `(category, value)` pairs in rank order.
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.buckets
            .iter()
            .map(|b| (b.category.as_str(), b.value))
            .collect()
    }
}

/// Value descending, then category ascending.
fn compare_buckets(a: &Bucket, b: &Bucket) -> Ordering {
    b.value
        .total_cmp(&a.value)
        .then_with(|| a.category.cmp(&b.category))
}

/// Groups `selection` by `dimension`, sums `measure` per group, ranks and
/// truncates to `limit` when given. Empty input gives an empty result.
pub fn aggregate(
    selection: &Selection<'_>,
    dimension: Dimension,
    measure: Measure,
    limit: Option<usize>,
) -> AggregationResult {
    let mut sums: FxHashMap<ValueId, f64> = FxHashMap::default();
    for record in selection.iter() {
        *sums.entry(record.category_id(dimension)).or_insert(0.0) += record.measure(measure);
    }

    let dataset = selection.dataset();
    let mut buckets: Vec<Bucket> = sums
        .into_iter()
        .map(|(id, value)| Bucket {
            category: dataset.category(dimension, id).unwrap_or_default().to_string(),
            value,
        })
        .collect();

    buckets.sort_by(compare_buckets);

    let category_count = buckets.len();
    if let Some(limit) = limit {
        buckets.truncate(limit);
    }

    log::trace!(
        target: "AGG",
        "{} by {}: {} groups, kept {}",
        measure,
        dimension,
        category_count,
        buckets.len()
    );

    AggregationResult {
        dimension,
        measure,
        buckets,
        category_count,
    }
}
