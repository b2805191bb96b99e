//! FILENAME: core/crossfilter-engine/src/service.rs
//! The cross-filter service.
//!
//! One service per loaded dataset and dashboard definition. It is immutable
//! and shared by every session; each session passes in its own
//! `FilterState`. Every render recomputes from scratch so the result always
//! reflects the current state. Nothing is cached between filter changes.

use std::sync::Arc;

use engine::{Dataset, Dimension, Measure};

use crate::definition::{ChartDefinition, DashboardDefinition, DefinitionError};
use crate::engine::{aggregate, filter_records};
use crate::filter::FilterState;
use crate::highlight::resolve;
use crate::kpi::{compute_kpis, KpiResult};
use crate::toggle::{self, FilterChanged};
use crate::view::{ChartSpec, DashboardView};

#[derive(Debug, Clone)]
pub struct CrossFilterService {
    dataset: Arc<Dataset>,
    definition: DashboardDefinition,
}

impl CrossFilterService {
    pub fn new(dataset: Arc<Dataset>, definition: DashboardDefinition) -> Result<Self, DefinitionError> {
        definition.validate()?;
        Ok(CrossFilterService { dataset, definition })
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn definition(&self) -> &DashboardDefinition {
        &self.definition
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Aggregates `dimension` under every selection except its own, then
    /// marks its own selection (if any) as the highlighted bucket.
    pub fn render_dimension(
        &self,
        dimension: Dimension,
        measure: Measure,
        state: &FilterState,
        limit: Option<usize>,
    ) -> ChartSpec {
        let chart = ChartDefinition {
            dimension,
            measure,
            limit,
            ..ChartDefinition::new(dimension, measure)
        };
        self.render_chart(&chart, state)
    }

    pub fn render_chart(&self, chart: &ChartDefinition, state: &FilterState) -> ChartSpec {
        let selection = filter_records(&self.dataset, state, Some(chart.dimension));
        let result = aggregate(&selection, chart.dimension, chart.measure, chart.limit);
        let selected = state.get(chart.dimension);

        ChartSpec {
            dimension: chart.dimension,
            measure: chart.measure,
            title: chart.display_title(),
            color: chart.color.clone(),
            selected: selected.map(str::to_string),
            buckets: resolve(&result, selected),
            category_count: result.category_count,
        }
    }

    pub fn render_kpis(&self, state: &FilterState) -> KpiResult {
        compute_kpis(&self.dataset, state)
    }

    /// Every configured chart plus KPIs and the active-filter row.
    pub fn render(&self, state: &FilterState) -> DashboardView {
        DashboardView {
            title: self.definition.title.clone(),
            active_filters: state.active_filters(),
            kpis: self.render_kpis(state),
            charts: self
                .definition
                .charts
                .iter()
                .map(|chart| self.render_chart(chart, state))
                .collect(),
        }
    }

    // ========================================================================
    // INTERACTION
    // ========================================================================

    /// Applies a click. Dimensions without a chart in this dashboard are
    /// ignored and leave `state` untouched.
    pub fn click(&self, state: &mut FilterState, dimension: Dimension, category: &str) -> Option<FilterChanged> {
        if self.definition.chart(dimension).is_none() {
            log::warn!(target: "TOGGLE", "click on unconfigured dimension {} ignored", dimension);
            return None;
        }
        Some(toggle::on_click(state, dimension, category))
    }

    pub fn reset(&self, state: &mut FilterState) -> FilterChanged {
        toggle::reset(state)
    }
}
