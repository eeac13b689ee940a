//! Chart configuration loaded from JSON.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

fn default_constructor() -> String {
    "Highcharts.Chart".to_string()
}

fn default_register_callback() -> Option<String> {
    Some("registerChart".to_string())
}

fn default_clean_output() -> bool {
    true
}

fn default_id_length() -> usize {
    8
}

/// How a chart script is named, constructed and post-processed.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "id": "sales", "render_to": "container", "options": { "chart/type": "line" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart id; a random one is generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Id of the container element the chart renders into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_to: Option<String>,

    /// The JavaScript constructor invoked with the options literal.
    #[serde(default = "default_constructor")]
    pub constructor: String,

    /// Function the load handler calls with the chart; `null` disables it.
    #[serde(default = "default_register_callback")]
    pub register_callback: Option<String>,

    /// Run the separator cleanup over the assembled script.
    #[serde(default = "default_clean_output")]
    pub clean_output: bool,

    /// Length of generated ids.
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Start every section with its catalog defaults.
    #[serde(default)]
    pub section_defaults: bool,

    /// Options preset by path, e.g. `"chart/zoomType": "xy"`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, serde_json::Value>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            id: None,
            render_to: None,
            constructor: default_constructor(),
            register_callback: default_register_callback(),
            clean_output: default_clean_output(),
            id_length: default_id_length(),
            section_defaults: false,
            options: IndexMap::new(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ChartError::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ChartError::Config(format!("{}: {}", path.display(), e)))
    }
}
