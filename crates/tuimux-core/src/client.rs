use crate::error::Result;
use crate::gateway::{CommandRunner, ProcessRunner};
use crate::inventory::{parse_sessions, parse_windows, Session, Window, SESSION_FORMAT, WINDOW_FORMAT};
use std::env;
use std::sync::Arc;
use tracing::{debug, info};

/// Whether a dashboard-initiated attach should spawn a client or move the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachMode {
    Attach,
    Switch,
}

/// True when this process runs inside a tmux client (`TMUX` is set and non-empty).
pub fn detect_inside_tmux() -> bool {
    env::var_os("TMUX").is_some_and(|value| !value.is_empty())
}

#[derive(Clone)]
pub struct TmuxClient {
    runner: Arc<dyn CommandRunner>,
    inside_tmux: bool,
}

impl TmuxClient {
    pub fn new(runner: Arc<dyn CommandRunner>, inside_tmux: bool) -> Self {
        Self {
            runner,
            inside_tmux,
        }
    }

    pub fn with_binary(binary: &str, inside_tmux: bool) -> Self {
        Self::new(Arc::new(ProcessRunner::new(binary)), inside_tmux)
    }

    pub fn binary(&self) -> &str {
        self.runner.binary()
    }

    pub fn inside_tmux(&self) -> bool {
        self.inside_tmux
    }

    pub fn attach_mode(&self) -> AttachMode {
        if self.inside_tmux {
            AttachMode::Switch
        } else {
            AttachMode::Attach
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        self.runner.run(&args)
    }

    pub fn list_sessions(&self) -> Result<Vec<Session>> {
        let output = match self.run(&["list-sessions", "-F", SESSION_FORMAT]) {
            Ok(output) => output,
            Err(err) if err.is_no_server() => {
                debug!("no tmux server running; empty session list");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        parse_sessions(&output)
    }

    pub fn list_windows(&self, session_name: &str) -> Result<Vec<Window>> {
        let output = match self.run(&["list-windows", "-t", session_name, "-F", WINDOW_FORMAT]) {
            Ok(output) => output,
            Err(err) if err.is_no_server() => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        parse_windows(&output)
    }

    pub fn new_session(&self, name: &str) -> Result<()> {
        self.run(&["new-session", "-d", "-s", name])?;
        info!(session = %name, "created session");
        Ok(())
    }

    pub fn new_window(&self, session_name: &str, name: Option<&str>) -> Result<()> {
        let mut args = vec!["new-window", "-t", session_name];
        if let Some(name) = name.filter(|name| !name.is_empty()) {
            args.extend(["-n", name]);
        }
        self.run(&args)?;
        info!(session = %session_name, "created window");
        Ok(())
    }

    pub fn kill_session(&self, name: &str) -> Result<()> {
        self.run(&["kill-session", "-t", name])?;
        info!(session = %name, "killed session");
        Ok(())
    }

    pub fn kill_window(&self, window_id: &str) -> Result<()> {
        self.run(&["kill-window", "-t", window_id])?;
        info!(window = %window_id, "killed window");
        Ok(())
    }

    pub fn rename_session(&self, old_name: &str, new_name: &str) -> Result<()> {
        self.run(&["rename-session", "-t", old_name, new_name])?;
        info!(from = %old_name, to = %new_name, "renamed session");
        Ok(())
    }

    pub fn rename_window(&self, window_id: &str, new_name: &str) -> Result<()> {
        self.run(&["rename-window", "-t", window_id, new_name])?;
        info!(window = %window_id, to = %new_name, "renamed window");
        Ok(())
    }

    pub fn select_window(&self, window_id: &str) -> Result<()> {
        self.run(&["select-window", "-t", window_id]).map(|_| ())
    }

    pub fn switch_client(&self, session_name: &str) -> Result<()> {
        self.run(&["switch-client", "-t", session_name]).map(|_| ())
    }

    /// Takes over the terminal until the user detaches.
    pub fn attach(&self, session_name: &str) -> Result<()> {
        let args = vec![
            "attach".to_string(),
            "-t".to_string(),
            session_name.to_string(),
        ];
        self.runner.run_attached(&args)
    }

    /// Last `lines` lines of the window's active pane.
    pub fn capture_window(&self, window_id: &str, lines: u32) -> Result<String> {
        let start = format!("-{lines}");
        self.run(&["capture-pane", "-t", window_id, "-p", "-S", &start])
    }
}
