//! FILENAME: core/crossfilter-engine/src/lib.rs
//! Cross-filtering subsystem.
//!
//! Clicking a bar in one chart filters every other chart and the KPIs, while
//! the clicked chart keeps showing all of its own categories with the
//! selected one highlighted. Depends on `engine` for the dataset and the
//! dimension/measure types.
//!
//! Layers:
//! - `filter`: per-session selection state
//! - `engine`: filtering with self-exclusion, and ranked aggregation
//! - `highlight`: which bucket is selected vs dimmed
//! - `toggle`: click state machine and change events
//! - `kpi`: headline totals
//! - `definition`: serializable dashboard layout (WHAT is charted)
//! - `view`: render-ready output (WHAT we display)
//! - `service`: ties the above together per dataset

pub mod definition;
pub mod engine;
pub mod filter;
pub mod highlight;
pub mod kpi;
pub mod service;
pub mod toggle;
pub mod view;

pub use definition::*;
pub use self::engine::{aggregate, filter_records, AggregationResult, Bucket, Selection};
pub use filter::{DuplicateSelection, FilterEntry, FilterState};
pub use highlight::resolve;
pub use kpi::{compute_kpis, totals_of, KpiResult};
pub use service::CrossFilterService;
pub use toggle::{on_click, reset, toggled, FilterAction, FilterChanged};
pub use view::*;
