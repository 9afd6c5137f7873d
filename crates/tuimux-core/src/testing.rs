use crate::error::Result;
use crate::gateway::CommandRunner;
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&[String]) -> Result<String> + Send + Sync>;

/// In-memory runner that records every argv and answers from a closure.
pub struct ScriptedRunner {
    respond: Responder,
    calls: Mutex<Vec<Vec<String>>>,
    attached: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&[String]) -> Result<String> + Send + Sync + 'static,
    {
        Arc::new(Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
            attached: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn calls_to(&self, subcommand: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.first().map(String::as_str) == Some(subcommand))
            .count()
    }

    pub fn attached_calls(&self) -> Vec<Vec<String>> {
        self.attached
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn binary(&self) -> &str {
        "tmux"
    }

    fn run(&self, args: &[String]) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(args.to_vec());
        }
        (self.respond)(args)
    }

    fn run_attached(&self, args: &[String]) -> Result<()> {
        if let Ok(mut calls) = self.attached.lock() {
            calls.push(args.to_vec());
        }
        Ok(())
    }
}

/// Answers `list-sessions` with `sessions` and `list-windows -t <name>` with
/// one window named after the session.
pub fn inventory_runner(sessions: &'static str) -> Arc<ScriptedRunner> {
    ScriptedRunner::new(move |args| match args.first().map(String::as_str) {
        Some("list-sessions") => Ok(sessions.to_string()),
        Some("list-windows") => {
            let target = args.get(2).cloned().unwrap_or_default();
            Ok(format!("@{target}\t{target}-main\t0\t1"))
        }
        _ => Ok(String::new()),
    })
}
