//! FILENAME: app/dashboard/src/events.rs
// PURPOSE: Interaction events delivered by the UI, one JSON object each.
// FORMAT: {"type":"click","dimension":"State","category":"Texas"} | {"type":"reset"}

use engine::Dimension;
use serde::{Deserialize, Serialize};

use crate::{log_debug, log_warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionEvent {
    Click {
        dimension: String,
        /// Category under the cursor; absent when the click hit no bar.
        #[serde(default)]
        category: Option<String>,
    },
    Reset,
}

/// An event checked against the closed dimension set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    Click { dimension: Dimension, category: String },
    Reset,
}

impl InteractionEvent {
    pub fn click(dimension: impl Into<String>, category: impl Into<String>) -> Self {
        InteractionEvent::Click {
            dimension: dimension.into(),
            category: Some(category.into()),
        }
    }

    pub fn parse_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// `None` for clicks on unknown dimensions and clicks without a category.
    pub fn resolve(&self) -> Option<FilterCommand> {
        match self {
            InteractionEvent::Reset => Some(FilterCommand::Reset),
            InteractionEvent::Click { dimension, category } => {
                let dimension = match dimension.parse::<Dimension>() {
                    Ok(d) => d,
                    Err(e) => {
                        log_warn!("EVENT", "ignoring click: {}", e);
                        return None;
                    }
                };
                match category.as_deref() {
                    Some(c) if !c.trim().is_empty() => Some(FilterCommand::Click {
                        dimension,
                        category: c.to_string(),
                    }),
                    _ => {
                        log_debug!("EVENT", "ignoring click on {} without a category", dimension);
                        None
                    }
                }
            }
        }
    }
}
