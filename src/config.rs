//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! The browser entry point reads overrides from
//! `<script id="app-config" type="application/json">` when the page has one.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigurationError;
use crate::domain::listbox::ListConfig;
use crate::domain::logging::{LogComponent, LogLevel};
use crate::infrastructure::http::DEFAULT_TOKEN_LIST_URL;
use crate::log_warn;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub token_list_url: String,
    pub log_level: LogLevel,
    pub list: ListConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token_list_url: DEFAULT_TOKEN_LIST_URL.to_string(),
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
            list: ListConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigurationError> {
        let config: AppConfig =
            serde_json::from_str(raw).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.token_list_url.trim().is_empty() {
            return Err(ConfigurationError::InvalidParameter("token_list_url cannot be empty".to_string()));
        }
        self.list.validate()
    }

    /// Config embedded in the page; defaults when the page has none
    pub fn from_document() -> Result<Self, ConfigurationError> {
        let raw = gloo::utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());

        match raw {
            None => Ok(Self::default()),
            Some(raw) => Self::from_json(&raw),
        }
    }

    /// Like [`AppConfig::from_document`], but falls back to defaults on invalid input
    pub fn load_from_document() -> Self {
        Self::from_document().unwrap_or_else(|error| {
            log_warn!(LogComponent::Presentation("Config"), "ignoring page config: {}", error);
            Self::default()
        })
    }
}
