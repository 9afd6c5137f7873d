use std::io;
use thiserror::Error;

/// Phrases tmux prints when there is no server to talk to.
const NO_SERVER_PHRASES: &[&str] = &[
    "no server running",
    "failed to connect",
    "error connecting to",
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TmuxError {
    /// The binary could not be spawned at all. Permanent for the process lifetime.
    #[error("{binary} is not installed or not on PATH")]
    Unavailable { binary: String },
    #[error("{message}")]
    CommandFailed { message: String },
    #[error("unexpected {kind} row {line:?}: {reason}")]
    Parse {
        kind: &'static str,
        line: String,
        reason: String,
    },
}

impl TmuxError {
    pub fn command_failed<S: Into<String>>(message: S) -> Self {
        TmuxError::CommandFailed {
            message: message.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, TmuxError::Unavailable { .. })
    }

    /// A failed command whose diagnostic says no tmux server is running.
    pub fn is_no_server(&self) -> bool {
        match self {
            TmuxError::CommandFailed { message } => is_no_server_message(message),
            _ => false,
        }
    }
}

pub fn is_no_server_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    NO_SERVER_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

pub type Result<T> = std::result::Result<T, TmuxError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
