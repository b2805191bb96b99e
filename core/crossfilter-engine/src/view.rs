//! FILENAME: core/crossfilter-engine/src/view.rs
//! PURPOSE: Render-ready view types handed to chart adapters and the CLI.

use engine::{Dimension, Measure};
use serde::{Deserialize, Serialize};

use crate::filter::FilterEntry;
use crate::kpi::KpiResult;

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBucket {
    pub category: String,
    pub value: f64,
    /// False when another category of this chart is selected.
    pub highlighted: bool,
}

/// Everything an adapter needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub dimension: Dimension,
    pub measure: Measure,
    pub title: String,
    /// Base bar color, e.g. `#3b82f6`.
    pub color: String,
    /// This chart's own selection, if any.
    pub selected: Option<String>,
    pub buckets: Vec<ChartBucket>,
    /// Groups before truncation.
    pub category_count: usize,
}

impl ChartSpec {
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.category.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.buckets.iter().map(|b| b.value)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// The full dashboard after one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub active_filters: Vec<FilterEntry>,
    pub kpis: KpiResult,
    pub charts: Vec<ChartSpec>,
}

impl DashboardView {
    pub fn chart(&self, dimension: Dimension) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.dimension == dimension)
    }
}
