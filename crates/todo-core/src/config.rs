//! Configuration
//!
//! Settings the host page may override. Every field has a default, so an
//! empty object (or no config at all) is valid.

use log::LevelFilter;
use serde::Deserialize;

use crate::domain::{TodoError, TodoResult};
use crate::repository::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Slot holding the JSON array of todos
    pub storage_key: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Heading shown above the list
    pub title: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
            title: "Todos".to_string(),
        }
    }
}

impl TodoConfig {
    pub fn from_json(raw: &str) -> TodoResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|e| TodoError::Config(e.to_string()))?;
        if config.storage_key.is_empty() {
            return Err(TodoError::Config("storage_key must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Parsed `log_level`, `Info` when unrecognised
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
