//! FILENAME: app/dashboard/src/adapters/plotly.rs
// PURPOSE: Plotly figure (data + layout) for a bar chart.

use crossfilter_engine::ChartSpec;
use serde_json::{json, Value};

use super::{ChartAdapter, ChartStyle};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyAdapter;

impl ChartAdapter for PlotlyAdapter {
    fn name(&self) -> &'static str {
        "plotly"
    }

    fn render(&self, spec: &ChartSpec, style: &ChartStyle) -> Value {
        let x: Vec<&str> = spec.categories().collect();
        let y: Vec<f64> = spec.values().collect();

        json!({
            "data": [{
                "type": "bar",
                "x": x,
                "y": y,
                "marker": { "color": style.bar_colors(spec) }
            }],
            "layout": {
                "title": { "text": spec.title },
                "template": "plotly_white",
                "margin": { "l": 20, "r": 20, "t": 40, "b": 20 },
                "paper_bgcolor": "rgba(0,0,0,0)",
                "clickmode": "event+select",
                "xaxis": { "title": { "text": spec.dimension.to_string() } },
                "yaxis": { "title": { "text": spec.measure.to_string() } }
            }
        })
    }
}
