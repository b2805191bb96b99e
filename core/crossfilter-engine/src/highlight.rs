//! FILENAME: core/crossfilter-engine/src/highlight.rs
//! PURPOSE: Marks which aggregated bucket is the selected one.
//! CONTEXT: With no selection every bucket is highlighted. With a selection
//! only the bucket whose category equals it is highlighted; the rest are
//! dimmed. Presentation metadata only: nothing is filtered here.

use crate::engine::AggregationResult;
use crate::view::ChartBucket;

pub fn resolve(result: &AggregationResult, selected: Option<&str>) -> Vec<ChartBucket> {
    result
        .buckets
        .iter()
        .map(|bucket| ChartBucket {
            category: bucket.category.clone(),
            value: bucket.value,
            highlighted: selected.map_or(true, |s| s == bucket.category),
        })
        .collect()
}
