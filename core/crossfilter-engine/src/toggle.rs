//! FILENAME: core/crossfilter-engine/src/toggle.rs
//! Click Toggle Controller.
//!
//! Per dimension the state is `Unset` or `Set(v)`:
//! - `Unset  --click(v)-->  Set(v)`
//! - `Set(v) --click(v)-->  Unset`
//! - `Set(a) --click(b)-->  Set(b)` for `b != a`
//! - `reset()` forces every dimension to `Unset`.
//!
//! Every transition returns a `FilterChanged` describing it. Callers must
//! re-render every chart and KPI from the new state afterwards.

use engine::Dimension;
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum FilterAction {
    Set(String),
    Unset,
    ResetAll,
}

/// Emitted after every mutation of a `FilterState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChanged {
    /// `None` for `ResetAll`.
    pub dimension: Option<Dimension>,
    #[serde(flatten)]
    pub action: FilterAction,
}

impl FilterChanged {
    /// Notification text for the toast UI.
    pub fn message(&self) -> String {
        match (&self.action, self.dimension) {
            (FilterAction::Set(value), Some(dimension)) => {
                format!("Filtered by {}: {}", dimension, value)
            }
            (FilterAction::Unset, Some(dimension)) => format!("Removed filter: {}", dimension),
            _ => "Filters reset".to_string(),
        }
    }
}

/// Applies a click on `clicked` in `dimension`'s chart.
///
/// A category that does not occur in the data is still selected; it just
/// yields empty results downstream.
pub fn on_click(state: &mut FilterState, dimension: Dimension, clicked: &str) -> FilterChanged {
    let action = if state.get(dimension) == Some(clicked) {
        state.unset(dimension);
        FilterAction::Unset
    } else {
        state.set(dimension, clicked);
        FilterAction::Set(clicked.to_string())
    };

    log::debug!(target: "TOGGLE", "{} click '{}' -> {:?}", dimension, clicked, action);

    FilterChanged {
        dimension: Some(dimension),
        action,
    }
}

/// Returns the state a click would produce, leaving `state` untouched.
pub fn toggled(state: &FilterState, dimension: Dimension, clicked: &str) -> FilterState {
    let mut next = state.clone();
    on_click(&mut next, dimension, clicked);
    next
}

/// Clears every selection.
pub fn reset(state: &mut FilterState) -> FilterChanged {
    log::debug!(target: "TOGGLE", "reset ({} active)", state.len());
    state.clear();
    FilterChanged {
        dimension: None,
        action: FilterAction::ResetAll,
    }
}
