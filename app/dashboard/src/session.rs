//! FILENAME: app/dashboard/src/session.rs
// PURPOSE: One user's view of the dashboard.
// CONTEXT: A session owns its FilterState and nothing else mutable. The
// CrossFilterService (and the Dataset behind it) is shared read-only by all
// sessions, so sessions never observe each other's selections.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use crossfilter_engine::{CrossFilterService, DashboardView, FilterChanged, FilterState, KpiResult};
use engine::Dimension;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::adapters::{ChartAdapter, ChartStyle};
use crate::events::{FilterCommand, InteractionEvent};
use crate::format::{active_filter_labels, kpi_cards, KpiCard};
use crate::log_info;

pub type SessionId = Uuid;

// ============================================================================
// RENDERED OUTPUT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub dimension: Dimension,
    pub title: String,
    /// The adapter's option object for this chart.
    pub option: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDashboard {
    pub session_id: SessionId,
    pub title: String,
    pub adapter: String,
    pub active_filters: Vec<String>,
    pub kpi_cards: Vec<KpiCard>,
    pub kpis: KpiResult,
    pub charts: Vec<RenderedChart>,
}

/// What the presentation layer receives after every interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderedView {
    Ready(RenderedDashboard),
    NoData { reason: String },
}

impl RenderedView {
    pub fn is_ready(&self) -> bool {
        matches!(self, RenderedView::Ready(_))
    }
}

// ============================================================================
// SESSION
// ============================================================================

#[derive(Debug)]
pub struct DashboardSession {
    id: SessionId,
    created_at: DateTime<Utc>,
    filters: FilterState,
    service: Arc<CrossFilterService>,
}

impl DashboardSession {
    pub fn new(service: Arc<CrossFilterService>) -> Self {
        DashboardSession {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            filters: FilterState::new(),
            service,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn service(&self) -> &Arc<CrossFilterService> {
        &self.service
    }

    /// Applies one UI event. Returns the change notification, or `None` when
    /// the event was ignored and the state is unchanged.
    pub fn handle(&mut self, event: &InteractionEvent) -> Option<FilterChanged> {
        let changed = match event.resolve()? {
            FilterCommand::Click { dimension, category } => {
                self.service.click(&mut self.filters, dimension, &category)?
            }
            FilterCommand::Reset => self.service.reset(&mut self.filters),
        };
        log_info!("SESSION", "{} {}", self.id, changed.message());
        Some(changed)
    }

    /// Charts, KPIs and active filters for the current state.
    pub fn view(&self) -> DashboardView {
        self.service.render(&self.filters)
    }

    pub fn render(&self, adapter: &dyn ChartAdapter, dimmed_color: &str) -> RenderedDashboard {
        let view = self.view();
        let charts = view
            .charts
            .iter()
            .map(|spec| RenderedChart {
                dimension: spec.dimension,
                title: spec.title.clone(),
                option: adapter.render(spec, &ChartStyle::for_chart(spec, dimmed_color)),
            })
            .collect();

        RenderedDashboard {
            session_id: self.id,
            title: view.title,
            adapter: adapter.name().to_string(),
            active_filters: active_filter_labels(&view.active_filters),
            kpi_cards: kpi_cards(&view.kpis),
            kpis: view.kpis,
            charts,
        }
    }
}
