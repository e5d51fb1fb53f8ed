use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml (all optional — a missing file means
/// everything here takes its default).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key-hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides, keyed by theme slot name (hex strings like "#FF4444")
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
