use gloo::console::error;
use serde::Deserialize;

use crate::message::MESSAGE_TTL_MS;

const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub api_base: String,
    pub message_ttl_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_ttl_ms: MESSAGE_TTL_MS,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: BoardConfig = serde_json::from_str(json)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn load() -> Self {
        let Some(json) = config_json_from_dom() else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                error!(format!("Ignoring malformed #{CONFIG_ELEMENT_ID}: {e}"));
                Self::default()
            }
        }
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}
