//! FILENAME: app/dashboard/src/adapters/echarts.rs
// PURPOSE: Apache ECharts bar chart options.

use crossfilter_engine::ChartSpec;
use serde_json::{json, Value};

use super::{ChartAdapter, ChartStyle};

#[derive(Debug, Clone, Copy, Default)]
pub struct EChartsAdapter;

impl ChartAdapter for EChartsAdapter {
    fn name(&self) -> &'static str {
        "echarts"
    }

    fn render(&self, spec: &ChartSpec, style: &ChartStyle) -> Value {
        let categories: Vec<&str> = spec.categories().collect();
        let data: Vec<Value> = spec
            .buckets
            .iter()
            .map(|b| {
                json!({
                    "value": b.value.round(),
                    "itemStyle": { "color": style.bar_color(b.highlighted) }
                })
            })
            .collect();

        json!({
            "title": { "text": spec.title, "left": "center", "top": "5%" },
            "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
            "grid": { "left": "3%", "right": "4%", "bottom": "10%", "containLabel": true },
            "xAxis": [{
                "type": "category",
                "data": categories,
                "axisTick": { "alignWithLabel": true },
                "axisLabel": { "rotate": 45, "interval": 0 }
            }],
            "yAxis": [{ "type": "value" }],
            "series": [{
                "name": spec.measure.to_string(),
                "type": "bar",
                "barWidth": "60%",
                "data": data
            }]
        })
    }
}
