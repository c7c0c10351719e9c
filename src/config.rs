use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the embedded config from the page. A missing element means defaults.
    pub fn from_document() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        Self::from_json(&text)
    }
}
