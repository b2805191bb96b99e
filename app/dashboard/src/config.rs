//! FILENAME: app/dashboard/src/config.rs
// PURPOSE: Dashboard configuration loaded from a JSON file.
// CONTEXT: Every field has a default, so an absent file or a partial file
// still yields a usable configuration. Dimension and measure names are
// checked by serde against the closed enums while parsing.

use std::path::{Path, PathBuf};

use crossfilter_engine::DashboardDefinition;
use serde::{Deserialize, Serialize};

use crate::adapters::{adapter_by_name, ChartAdapter, DEFAULT_DIMMED_COLOR};
use crate::error::ConfigError;
use crate::log_info;

fn default_details_path() -> PathBuf {
    PathBuf::from("Details.csv")
}

fn default_orders_path() -> PathBuf {
    PathBuf::from("Orders.csv")
}

fn default_adapter() -> String {
    "echarts".to_string()
}

fn default_dimmed_color() -> String {
    DEFAULT_DIMMED_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Line-item table (one row per product in an order).
    #[serde(default = "default_details_path")]
    pub details_path: PathBuf,

    /// Order header table (customer and location per order).
    #[serde(default = "default_orders_path")]
    pub orders_path: PathBuf,

    /// Chart adapter name: echarts, plotly or vega-lite.
    #[serde(default = "default_adapter")]
    pub adapter: String,

    #[serde(default)]
    pub log_file: Option<PathBuf>,

    #[serde(default)]
    pub dashboard: DashboardDefinition,

    /// Bar color for categories that are not the selected one.
    #[serde(default = "default_dimmed_color")]
    pub dimmed_color: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            details_path: default_details_path(),
            orders_path: default_orders_path(),
            adapter: default_adapter(),
            log_file: None,
            dashboard: DashboardDefinition::default(),
            dimmed_color: default_dimmed_color(),
        }
    }
}

impl DashboardConfig {
    /// Reads and validates the config at `path`. A missing file gives the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log_info!("CONFIG", "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|err| match err {
            ConfigError::Json { source, .. } => ConfigError::Json {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        log_info!("CONFIG", "loaded {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Json {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dashboard.validate()?;
        self.adapter()?;
        Ok(())
    }

    /// The configured chart adapter.
    pub fn adapter(&self) -> Result<Box<dyn ChartAdapter>, ConfigError> {
        adapter_by_name(&self.adapter).ok_or_else(|| ConfigError::UnknownAdapter(self.adapter.clone()))
    }
}
