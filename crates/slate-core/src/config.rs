use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional user configuration, read from `slate/config.toml` in the
/// platform config directory. A missing or unparseable file yields the
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the board file lives. Overridden by `--file` / `SLATE_FILE`.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("slate/config.toml"))
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn default_data_path() -> Option<PathBuf> {
        dirs::data_dir().map(|data| data.join("slate/board.json"))
    }

    /// The board file to use: explicit config value first, then the
    /// platform default.
    pub fn effective_data_path(&self) -> Option<PathBuf> {
        self.data_path.clone().or_else(Self::default_data_path)
    }
}
