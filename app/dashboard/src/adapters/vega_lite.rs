//! FILENAME: app/dashboard/src/adapters/vega_lite.rs
// PURPOSE: Vega-Lite bar chart specification with inline data.
// CONTEXT: Highlighting is carried as a boolean field on each datum and
// mapped to color with a condition, so the spec needs no selection params.

use crossfilter_engine::ChartSpec;
use serde_json::{json, Map, Value};

use super::{ChartAdapter, ChartStyle};

const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, Copy, Default)]
pub struct VegaLiteAdapter;

impl ChartAdapter for VegaLiteAdapter {
    fn name(&self) -> &'static str {
        "vega-lite"
    }

    fn render(&self, spec: &ChartSpec, style: &ChartStyle) -> Value {
        let x_field = spec.dimension.to_string();
        let y_field = spec.measure.to_string();

        let values: Vec<Value> = spec
            .buckets
            .iter()
            .map(|b| {
                let mut datum = Map::new();
                datum.insert(x_field.clone(), json!(b.category));
                datum.insert(y_field.clone(), json!(b.value));
                datum.insert("highlighted".to_string(), json!(b.highlighted));
                Value::Object(datum)
            })
            .collect();

        json!({
            "$schema": SCHEMA,
            "title": spec.title,
            "width": 300,
            "height": 300,
            "data": { "values": values },
            "mark": "bar",
            "encoding": {
                "x": {
                    "field": x_field,
                    "type": "nominal",
                    "sort": "-y",
                    "axis": { "labelAngle": -45 }
                },
                "y": { "field": y_field, "type": "quantitative", "title": y_field },
                "color": {
                    "condition": { "test": "datum.highlighted", "value": style.color },
                    "value": style.dimmed_color
                },
                "tooltip": [
                    { "field": x_field, "type": "nominal" },
                    { "field": y_field, "type": "quantitative" }
                ]
            }
        })
    }
}
