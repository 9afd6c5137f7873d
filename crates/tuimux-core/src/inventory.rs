//! Typed records parsed from tmux's tab-separated listing output.

use crate::error::{Result, TmuxError};

pub const SESSION_FORMAT: &str =
    "#{session_name}\t#{session_windows}\t#{session_created_string}\t#{session_attached}";
pub const WINDOW_FORMAT: &str =
    "#{window_id}\t#{window_name}\t#{window_index}\t#{window_active}";

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub window_count: u32,
    pub created: String,
    pub attached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub id: String,
    pub name: String,
    pub index: u32,
    pub active: bool,
}

/// Parses `list-sessions` output, sorted by name.
///
/// A row that does not match [`SESSION_FORMAT`] fails the whole parse.
pub fn parse_sessions(raw: &str) -> Result<Vec<Session>> {
    let mut sessions = Vec::new();
    if raw.trim().is_empty() {
        return Ok(sessions);
    }

    for line in raw.lines() {
        let [name, windows, created, attached] = split_row("session", line)?;
        sessions.push(Session {
            name: name.to_string(),
            window_count: parse_number("session", line, "window count", windows)?,
            created: created.to_string(),
            attached: attached == "1",
        });
    }

    sessions.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sessions)
}

/// Parses `list-windows` output, keeping tmux's tab order.
pub fn parse_windows(raw: &str) -> Result<Vec<Window>> {
    let mut windows = Vec::new();
    if raw.trim().is_empty() {
        return Ok(windows);
    }

    for line in raw.lines() {
        let [id, name, index, active] = split_row("window", line)?;
        windows.push(Window {
            id: id.to_string(),
            name: name.to_string(),
            index: parse_number("window", line, "index", index)?,
            active: active == "1",
        });
    }
    Ok(windows)
}

fn split_row<'a>(kind: &'static str, line: &'a str) -> Result<[&'a str; FIELD_COUNT]> {
    let fields: Vec<&str> = line.split('\t').collect();
    fields.try_into().map_err(|fields: Vec<&str>| TmuxError::Parse {
        kind,
        line: line.to_string(),
        reason: format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
    })
}

/// Digits only; padding or a sign is a format mismatch.
fn parse_number(kind: &'static str, line: &str, field: &str, value: &str) -> Result<u32> {
    let parsed = if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    };
    parsed.ok_or_else(|| TmuxError::Parse {
        kind,
        line: line.to_string(),
        reason: format!("{field} {value:?} is not a number"),
    })
}
