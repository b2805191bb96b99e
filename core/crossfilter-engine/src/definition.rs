//! FILENAME: core/crossfilter-engine/src/definition.rs
//! Dashboard definitions - which charts exist and how each is aggregated.
//!
//! A definition is plain serializable configuration. `validate()` is run by
//! `CrossFilterService::new` so a service never holds an invalid layout.

use engine::{Dimension, Measure};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_COLOR: &str = "#3b82f6";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_title() -> String {
    "Sales Dashboard".to_string()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("dashboard has no charts")]
    NoCharts,

    #[error("dimension {0} is charted more than once")]
    DuplicateDimension(Dimension),

    #[error("chart for {0} has a limit of zero")]
    ZeroLimit(Dimension),
}

// ============================================================================
// CHART DEFINITION
// ============================================================================

/// One chart: a dimension on the x axis and a summed measure on the y axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub dimension: Dimension,
    pub measure: Measure,

    /// Keep only the top `limit` categories. `None` keeps all of them.
    #[serde(default)]
    pub limit: Option<usize>,

    /// Chart title. Derived from the dimension and measure when absent.
    #[serde(default)]
    pub title: Option<String>,

    /// Base bar color.
    #[serde(default = "default_color")]
    pub color: String,
}

impl ChartDefinition {
    pub fn new(dimension: Dimension, measure: Measure) -> Self {
        ChartDefinition {
            dimension,
            measure,
            limit: None,
            title: None,
            color: default_color(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => match self.limit {
                Some(n) => format!("Top {} {} by {}", n, self.dimension, self.measure),
                None => format!("{} by {}", self.measure, self.dimension),
            },
        }
    }
}

// ============================================================================
// DASHBOARD DEFINITION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDefinition {
    #[serde(default = "default_title")]
    pub title: String,
    pub charts: Vec<ChartDefinition>,
}

impl DashboardDefinition {
    /// Profit by sub-category (all categories), then the top ten states and
    /// customers by sales.
    pub fn sales_overview() -> Self {
        DashboardDefinition {
            title: default_title(),
            charts: vec![
                ChartDefinition::new(Dimension::SubCategory, Measure::Profit)
                    .with_title("Profit by Sub-Category"),
                ChartDefinition::new(Dimension::State, Measure::Amount)
                    .with_limit(10)
                    .with_title("Top 10 States by Sales")
                    .with_color("#8b5cf6"),
                ChartDefinition::new(Dimension::CustomerName, Measure::Amount)
                    .with_limit(10)
                    .with_title("Top 10 Customers by Sales")
                    .with_color("#10b981"),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.charts.is_empty() {
            return Err(DefinitionError::NoCharts);
        }
        let mut seen = [false; Dimension::COUNT];
        for chart in &self.charts {
            if chart.limit == Some(0) {
                return Err(DefinitionError::ZeroLimit(chart.dimension));
            }
            let slot = &mut seen[chart.dimension.index()];
            if *slot {
                return Err(DefinitionError::DuplicateDimension(chart.dimension));
            }
            *slot = true;
        }
        Ok(())
    }

    pub fn chart(&self, dimension: Dimension) -> Option<&ChartDefinition> {
        self.charts.iter().find(|c| c.dimension == dimension)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.charts.iter().map(|c| c.dimension)
    }
}

impl Default for DashboardDefinition {
    fn default() -> Self {
        Self::sales_overview()
    }
}
