//! FILENAME: app/dashboard/src/adapters/mod.rs
// PURPOSE: Presentation adapters that turn a ChartSpec into a charting
// library's JSON option object.
// CONTEXT: One adapter per charting technology. Adapters only translate;
// aggregation and highlighting are already done in the ChartSpec.

pub mod echarts;
pub mod plotly;
pub mod vega_lite;

use crossfilter_engine::ChartSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use echarts::EChartsAdapter;
pub use plotly::PlotlyAdapter;
pub use vega_lite::VegaLiteAdapter;

pub const DEFAULT_COLOR: &str = "#3b82f6";
pub const DEFAULT_DIMMED_COLOR: &str = "#dbeafe";

/// Names accepted by `adapter_by_name`.
pub const ADAPTER_NAMES: [&str; 3] = ["echarts", "plotly", "vega-lite"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Color of highlighted bars.
    pub color: String,
    /// Color of dimmed bars.
    pub dimmed_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            color: DEFAULT_COLOR.to_string(),
            dimmed_color: DEFAULT_DIMMED_COLOR.to_string(),
        }
    }
}

impl ChartStyle {
    pub fn new(color: impl Into<String>, dimmed_color: impl Into<String>) -> Self {
        ChartStyle {
            color: color.into(),
            dimmed_color: dimmed_color.into(),
        }
    }

    /// The chart's own base color with a shared dimmed color.
    pub fn for_chart(spec: &ChartSpec, dimmed_color: &str) -> Self {
        Self::new(spec.color.clone(), dimmed_color)
    }

    pub fn bar_color(&self, highlighted: bool) -> &str {
        if highlighted {
            &self.color
        } else {
            &self.dimmed_color
        }
    }

    /// One color per bucket, in bucket order.
    pub fn bar_colors(&self, spec: &ChartSpec) -> Vec<String> {
        spec.buckets
            .iter()
            .map(|b| self.bar_color(b.highlighted).to_string())
            .collect()
    }
}

pub trait ChartAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, spec: &ChartSpec, style: &ChartStyle) -> Value;
}

/// Looks up an adapter by name, ignoring case.
pub fn adapter_by_name(name: &str) -> Option<Box<dyn ChartAdapter>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "echarts" => Some(Box::new(EChartsAdapter)),
        "plotly" => Some(Box::new(PlotlyAdapter)),
        "vega-lite" | "vegalite" | "vega" => Some(Box::new(VegaLiteAdapter)),
        _ => None,
    }
}
