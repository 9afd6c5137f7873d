//! Session and window inventory for a tmux dashboard.
//!
//! [`gateway`] shells out to tmux, [`inventory`] parses its listings,
//! [`client`] names the commands, and [`coordinator`] keeps the visible
//! session/window selection consistent while fetches run on a [`worker`].

pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod gateway;
pub mod inventory;
pub mod worker;

#[cfg(test)]
mod testing;

pub use client::{detect_inside_tmux, AttachMode, TmuxClient};
pub use config::{default_config_path, load_config, DashboardConfig};
pub use coordinator::{
    Coordinator, FetchDisposition, FetchResult, Snapshot, StatusLine, SyncPhase, WindowFetch,
    DEFAULT_DEBOUNCE,
};
pub use error::{ConfigError, Result, TmuxError};
pub use gateway::{CommandRunner, ProcessRunner};
pub use inventory::{parse_sessions, parse_windows, Session, Window};
pub use worker::FetchWorker;
