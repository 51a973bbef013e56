use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from taskrow.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    /// Tasks the list starts with
    #[serde(default)]
    pub tasks: Vec<TaskSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Heading shown above the list
    #[serde(default = "default_title")]
    pub title: String,
    /// Hex color overrides keyed by theme slot (e.g. `done = "#1DB863"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            colors: HashMap::new(),
        }
    }
}

fn default_title() -> String {
    "Tasks".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSeed {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}
