use crate::coordinator::DEFAULT_DEBOUNCE;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub tmux_binary: String,
    pub debounce_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tmux_binary: "tmux".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            log_file: None,
        }
    }
}

impl DashboardConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tuimux/config.toml")
}

/// A missing file is not an error; it yields the defaults.
pub fn load_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
