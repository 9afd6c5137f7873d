//! Synchronous bridge to the multiplexer binary.
//!
//! Every call blocks until the child exits. Callers that must not block the
//! input loop run these on a worker (see [`crate::worker`]).

use crate::error::{Result, TmuxError};
use std::io;
use std::process::{Command, ExitStatus, Output};
use tracing::{debug, warn};

/// Runs one multiplexer subcommand per call. No retries at this layer.
pub trait CommandRunner: Send + Sync {
    fn binary(&self) -> &str;

    /// Captures stdout/stderr and returns trimmed stdout on a zero exit.
    fn run(&self, args: &[String]) -> Result<String>;

    /// Hands the terminal to the child and waits for it to exit.
    fn run_attached(&self, args: &[String]) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct ProcessRunner {
    binary: String,
}

impl ProcessRunner {
    pub fn new<S: Into<String>>(binary: S) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl CommandRunner for ProcessRunner {
    fn binary(&self) -> &str {
        &self.binary
    }

    fn run(&self, args: &[String]) -> Result<String> {
        debug!(binary = %self.binary, ?args, "running command");
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|err| spawn_failure(&self.binary, err))?;
        classify_output(&self.binary, &output)
    }

    fn run_attached(&self, args: &[String]) -> Result<()> {
        debug!(binary = %self.binary, ?args, "running attached command");
        let status = Command::new(&self.binary)
            .args(args)
            .status()
            .map_err(|err| spawn_failure(&self.binary, err))?;
        if status.success() {
            Ok(())
        } else {
            let message = exit_message(&self.binary, status);
            warn!(binary = %self.binary, %message, "attached command failed");
            Err(TmuxError::command_failed(message))
        }
    }
}

pub(crate) fn spawn_failure(binary: &str, err: io::Error) -> TmuxError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            warn!(%binary, error = %err, "binary unavailable");
            TmuxError::Unavailable {
                binary: binary.to_string(),
            }
        }
        _ => TmuxError::command_failed(format!("failed to run {binary}: {err}")),
    }
}

pub(crate) fn classify_output(binary: &str, output: &Output) -> Result<String> {
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if output.status.success() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let message = if !stderr.is_empty() {
        stderr
    } else if !stdout.is_empty() {
        stdout
    } else {
        exit_message(binary, output.status)
    };
    debug!(%binary, %message, "command failed");
    Err(TmuxError::command_failed(message))
}

fn exit_message(binary: &str, status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("{binary} exited with code {code}"),
        None => format!("{binary} terminated by a signal"),
    }
}
