use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tuimux_core::{default_config_path, load_config, DashboardConfig};

#[derive(Debug, Parser)]
#[command(
    name = "tuimux",
    version,
    about = "Terminal dashboard for tmux sessions and windows"
)]
pub struct Cli {
    /// Config file (default: <config dir>/tuimux/config.toml).
    #[arg(long, env = "TUIMUX_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// tmux executable to run.
    #[arg(long = "tmux", env = "TUIMUX_TMUX", value_name = "BIN")]
    pub tmux_binary: Option<String>,
    /// Quiet period before a highlighted session's windows are fetched.
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
    /// Append logs to this file; logging is discarded otherwise.
    #[arg(long, env = "TUIMUX_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Reads the config file and lays the command line over it.
    pub fn resolve(&self) -> Result<DashboardConfig> {
        let path = self.config.clone().unwrap_or_else(default_config_path);
        let mut config = load_config(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut DashboardConfig) {
        if let Some(binary) = self.tmux_binary.as_ref().filter(|b| !b.trim().is_empty()) {
            config.tmux_binary = binary.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}
