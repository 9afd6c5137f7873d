use std::sync::{Arc, Mutex};
use tuimux_core::{CommandRunner, Result, TmuxError};

type Table = Vec<(String, Vec<String>)>;

/// In-memory tmux server. Window ids are `@<name>`.
pub struct FakeTmux {
    sessions: Mutex<Table>,
    calls: Mutex<Vec<Vec<String>>>,
    failure: Mutex<Option<(String, String)>>,
}

impl FakeTmux {
    /// `sessions` pairs a session name with its space-separated window names.
    pub fn new(sessions: &[(&str, &str)]) -> Arc<Self> {
        let sessions = sessions
            .iter()
            .map(|(name, windows)| {
                (
                    name.to_string(),
                    windows.split_whitespace().map(str::to_string).collect(),
                )
            })
            .collect();
        Arc::new(Self {
            sessions: Mutex::new(sessions),
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        })
    }

    /// Makes every `subcommand` call fail with `message`.
    pub fn fail_on(&self, subcommand: &str, message: &str) {
        *self.failure.lock().unwrap() = Some((subcommand.to_string(), message.to_string()));
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, subcommand: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call[0] == subcommand)
            .count()
    }

    pub fn last(&self, subcommand: &str) -> Option<Vec<String>> {
        self.calls()
            .into_iter()
            .rev()
            .find(|call| call[0] == subcommand)
    }

    fn injected_failure(&self, args: &[String]) -> Result<()> {
        match self.failure.lock().unwrap().clone() {
            Some((subcommand, message)) if args[0] == subcommand => {
                Err(TmuxError::command_failed(message))
            }
            _ => Ok(()),
        }
    }

    fn answer(&self, args: &[String]) -> Result<String> {
        let mut sessions = self.sessions.lock().unwrap();
        let arg = |idx: usize| args.get(idx).cloned().unwrap_or_default();
        match args[0].as_str() {
            "list-sessions" => Ok(sessions
                .iter()
                .map(|(name, windows)| {
                    format!("{name}\t{}\tMon Jan 5 10:00:00 2026\t0", windows.len())
                })
                .collect::<Vec<_>>()
                .join("\n")),
            "list-windows" => {
                let target = arg(2);
                let (_, windows) = sessions
                    .iter()
                    .find(|(name, _)| *name == target)
                    .ok_or_else(|| TmuxError::command_failed(format!("can't find session: {target}")))?;
                Ok(windows
                    .iter()
                    .enumerate()
                    .map(|(idx, name)| format!("@{name}\t{name}\t{idx}\t{}", u8::from(idx == 0)))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            "new-session" => {
                sessions.push((arg(3), vec!["zsh".to_string()]));
                Ok(String::new())
            }
            "rename-session" => {
                let (from, to) = (arg(2), arg(3));
                for (name, _) in sessions.iter_mut().filter(|(name, _)| *name == from) {
                    *name = to.clone();
                }
                Ok(String::new())
            }
            "kill-session" => {
                let target = arg(2);
                sessions.retain(|(name, _)| *name != target);
                Ok(String::new())
            }
            "new-window" => {
                let target = arg(2);
                let window = if args.len() > 4 { arg(4) } else { "zsh".to_string() };
                if let Some((_, windows)) = sessions.iter_mut().find(|(name, _)| *name == target) {
                    windows.push(window);
                }
                Ok(String::new())
            }
            "kill-window" => {
                let id = arg(2);
                for (_, windows) in sessions.iter_mut() {
                    windows.retain(|name| format!("@{name}") != id);
                }
                Ok(String::new())
            }
            "rename-window" => {
                let (id, to) = (arg(2), arg(3));
                for (_, windows) in sessions.iter_mut() {
                    for name in windows.iter_mut().filter(|name| format!("@{name}") == id) {
                        *name = to.clone();
                    }
                }
                Ok(String::new())
            }
            "capture-pane" => Ok(format!("output of {}", arg(2))),
            _ => Ok(String::new()),
        }
    }
}

impl CommandRunner for FakeTmux {
    fn binary(&self) -> &str {
        "tmux"
    }

    fn run(&self, args: &[String]) -> Result<String> {
        self.calls.lock().unwrap().push(args.to_vec());
        self.injected_failure(args)?;
        self.answer(args)
    }

    fn run_attached(&self, args: &[String]) -> Result<()> {
        self.calls.lock().unwrap().push(args.to_vec());
        self.injected_failure(args)
    }
}
