use serde::Deserialize;
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides as "#RRGGBB" strings, keyed by theme field name.
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

/// Default: see src/templates/config.toml
fn default_true() -> bool {
    true
}
