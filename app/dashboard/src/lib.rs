//! FILENAME: app/dashboard/src/lib.rs
// PURPOSE: Main library entry point for the dashboard application.
// CONTEXT: Loads the dataset once, shares it read-only through a
// CrossFilterService, and keeps one DashboardSession per connected user.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossfilter_engine::{CrossFilterService, FilterChanged};
use engine::Dataset;

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod logging;
pub mod session;

pub use adapters::{adapter_by_name, ChartAdapter, ChartStyle, EChartsAdapter, PlotlyAdapter, VegaLiteAdapter};
pub use config::DashboardConfig;
pub use error::{AppError, ConfigError};
pub use events::{FilterCommand, InteractionEvent};
pub use format::{active_filter_labels, kpi_cards, KpiCard, NO_ACTIVE_FILTERS};
pub use logging::{init_log_file, init_logger, get_log_path, next_seq, write_log};
pub use session::{DashboardSession, RenderedChart, RenderedDashboard, RenderedView, SessionId};

// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    pub config: DashboardConfig,
    /// `None` when the dataset failed to load.
    pub service: Option<Arc<CrossFilterService>>,
    /// Why the dataset is unavailable, shown in the "no data" view.
    pub load_error: Option<String>,
    pub sessions: Mutex<HashMap<SessionId, DashboardSession>>,
    adapter: Box<dyn ChartAdapter>,
}

/// Loads the configured sources. A load failure is not fatal: the state is
/// created without a service and every render shows "no data".
pub fn create_app_state(config: DashboardConfig) -> Result<AppState, AppError> {
    log_info!("SYS", "Creating AppState");
    match persistence::load(&config.details_path, &config.orders_path) {
        Ok(dataset) => {
            log_info!(
                "SYS",
                "dataset ready: {} records, {} orders",
                dataset.len(),
                dataset.distinct_orders()
            );
            create_app_state_with_dataset(config, Arc::new(dataset))
        }
        Err(e) => {
            log_error!("LOAD", "{}", e);
            let adapter = config.adapter()?;
            Ok(AppState {
                load_error: Some(e.to_string()),
                service: None,
                sessions: Mutex::new(HashMap::new()),
                adapter,
                config,
            })
        }
    }
}

pub fn create_app_state_with_dataset(
    config: DashboardConfig,
    dataset: Arc<Dataset>,
) -> Result<AppState, AppError> {
    let adapter = config.adapter()?;
    let service = CrossFilterService::new(dataset, config.dashboard.clone())?;
    Ok(AppState {
        service: Some(Arc::new(service)),
        load_error: None,
        sessions: Mutex::new(HashMap::new()),
        adapter,
        config,
    })
}

impl AppState {
    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, DashboardSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn adapter(&self) -> &dyn ChartAdapter {
        self.adapter.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.service.is_some()
    }

    /// Opens a session with an empty filter state. `None` without data.
    pub fn open_session(&self) -> Option<SessionId> {
        let service = self.service.as_ref()?;
        let session = DashboardSession::new(Arc::clone(service));
        let id = session.id();
        log_info!("SESSION", "opened {} at {}", id, session.created_at().to_rfc3339());
        self.sessions().insert(id, session);
        Some(id)
    }

    pub fn close_session(&self, id: SessionId) -> bool {
        let removed = self.sessions().remove(&id).is_some();
        if removed {
            log_info!("SESSION", "closed {}", id);
        } else {
            log_debug!("SESSION", "close of unknown session {}", id);
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions().len()
    }

    /// Applies an event to one session. Unknown sessions are ignored.
    pub fn handle_event(&self, id: SessionId, event: &InteractionEvent) -> Option<FilterChanged> {
        let mut sessions = self.sessions();
        match sessions.get_mut(&id) {
            Some(session) => session.handle(event),
            None => {
                log_warn!("SESSION", "event for unknown session {}", id);
                None
            }
        }
    }

    pub fn render(&self, id: SessionId) -> RenderedView {
        if let Some(reason) = &self.load_error {
            return RenderedView::NoData {
                reason: reason.clone(),
            };
        }
        match self.sessions().get(&id) {
            Some(session) => {
                RenderedView::Ready(session.render(self.adapter(), &self.config.dimmed_color))
            }
            None => RenderedView::NoData {
                reason: format!("unknown session {}", id),
            },
        }
    }

    /// The view shown when no session can be opened.
    pub fn no_data_view(&self) -> RenderedView {
        RenderedView::NoData {
            reason: self
                .load_error
                .clone()
                .unwrap_or_else(|| "no dataset loaded".to_string()),
        }
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Runs the command-line dashboard and returns the process exit code.
pub fn run() -> i32 {
    logging::init_logger(log::LevelFilter::Info);

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", cli::USAGE);
            return 2;
        }
    };
    if args.help {
        eprintln!("{}", cli::USAGE);
        return 0;
    }

    match cli::run(args) {
        Ok(()) => 0,
        Err(e) => {
            log_error!("SYS", "{}", e);
            1
        }
    }
}
