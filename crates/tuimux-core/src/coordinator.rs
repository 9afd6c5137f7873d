//! Session/window synchronization.
//!
//! The coordinator is driven from a single control loop. Navigation events
//! arm a debounce deadline; when it passes, [`Coordinator::fire_due`] mints a
//! token and hands back a [`WindowFetch`] to run off-thread. Results come back
//! through [`Coordinator::complete`], which only commits the result carrying
//! the latest token and only while its session is still highlighted.
//!
//! Time is always passed in, so tests drive the state machine with synthetic
//! instants.

use crate::client::TmuxClient;
use crate::error::TmuxError;
use crate::inventory::{Session, Window};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longer than the gap between key-repeat highlight events.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(80);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Debouncing,
    Fetching,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRefresh {
    target: String,
    force: bool,
    deadline: Instant,
}

/// A window listing to run off the control thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFetch {
    pub token: u64,
    pub session: String,
}

impl WindowFetch {
    pub fn run(self, client: &TmuxClient) -> FetchResult {
        let outcome = client.list_windows(&self.session);
        FetchResult {
            token: self.token,
            session: self.session,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct FetchResult {
    pub token: u64,
    pub session: String,
    pub outcome: Result<Vec<Window>, TmuxError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    Committed,
    /// A newer fetch was issued (or the inventory was reloaded) after this one.
    Superseded,
    /// The highlighted session changed while the fetch was running.
    SelectionMoved,
}

/// What the view layer renders.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub sessions: &'a [Session],
    pub windows: &'a [Window],
    pub status: &'a StatusLine,
    pub selected_session: Option<usize>,
    pub selected_window: Option<usize>,
    pub current_session: Option<&'a str>,
    pub phase: SyncPhase,
}

pub struct Coordinator {
    client: TmuxClient,
    debounce: Duration,
    sessions: Vec<Session>,
    windows: Vec<Window>,
    session_cursor: Option<usize>,
    window_cursor: Option<usize>,
    current_session: Option<String>,
    pending: Option<PendingRefresh>,
    latest_token: u64,
    stale_through: u64,
    in_flight: bool,
    status: StatusLine,
    revision: u64,
}

impl Coordinator {
    pub fn new(client: TmuxClient, debounce: Duration) -> Self {
        Self {
            client,
            debounce,
            sessions: Vec::new(),
            windows: Vec::new(),
            session_cursor: None,
            window_cursor: None,
            current_session: None,
            pending: None,
            latest_token: 0,
            stale_through: 0,
            in_flight: false,
            status: StatusLine::info("Ready."),
            revision: 0,
        }
    }

    pub fn client(&self) -> &TmuxClient {
        &self.client
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn current_session(&self) -> Option<&str> {
        self.current_session.as_deref()
    }

    pub fn highlighted_session(&self) -> Option<&Session> {
        self.session_cursor.and_then(|idx| self.sessions.get(idx))
    }

    pub fn selected_window(&self) -> Option<&Window> {
        self.window_cursor.and_then(|idx| self.windows.get(idx))
    }

    /// Bumped on every change the view should pick up.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn phase(&self) -> SyncPhase {
        if self.pending.is_some() {
            SyncPhase::Debouncing
        } else if self.in_flight {
            SyncPhase::Fetching
        } else {
            SyncPhase::Idle
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            sessions: &self.sessions,
            windows: &self.windows,
            status: &self.status,
            selected_session: self.session_cursor,
            selected_window: self.window_cursor,
            current_session: self.current_session.as_deref(),
            phase: self.phase(),
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, message: S) {
        self.status = StatusLine::info(message);
        self.revision += 1;
    }

    pub fn set_error<S: Into<String>>(&mut self, message: S) {
        self.status = StatusLine::error(message);
        self.revision += 1;
    }

    /// Reloads the session list on the calling thread.
    ///
    /// Windows are cleared and every outstanding fetch becomes stale; the
    /// first session is highlighted and goes through the normal debounce.
    pub fn refresh_data(&mut self, now: Instant) {
        self.current_session = None;
        self.pending = None;
        self.stale_through = self.latest_token;
        self.in_flight = false;
        self.windows.clear();
        self.window_cursor = None;
        self.revision += 1;

        match self.client.list_sessions() {
            Ok(sessions) => {
                info!(count = sessions.len(), "loaded sessions");
                self.sessions = sessions;
                if self.sessions.is_empty() {
                    self.session_cursor = None;
                    self.set_status("No tmux sessions found.");
                } else {
                    self.session_cursor = Some(0);
                    self.set_status("Loaded tmux sessions.");
                    let first = self.sessions[0].name.clone();
                    self.request_refresh(&first, false, false, now);
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to list sessions");
                self.sessions.clear();
                self.session_cursor = None;
                self.set_error(err.to_string());
            }
        }
    }

    /// Highlights session `index`; a change of row is a navigation event.
    pub fn select_session(&mut self, index: usize, now: Instant) {
        if index >= self.sessions.len() || self.session_cursor == Some(index) {
            return;
        }
        self.session_cursor = Some(index);
        self.revision += 1;
        let name = self.sessions[index].name.clone();
        self.request_refresh(&name, false, false, now);
    }

    pub fn next_session(&mut self, now: Instant) {
        if let Some(index) = wrap_next(self.session_cursor, self.sessions.len()) {
            self.select_session(index, now);
        }
    }

    pub fn prev_session(&mut self, now: Instant) {
        if let Some(index) = wrap_prev(self.session_cursor, self.sessions.len()) {
            self.select_session(index, now);
        }
    }

    pub fn next_window(&mut self) {
        self.window_cursor = wrap_next(self.window_cursor, self.windows.len());
        self.revision += 1;
    }

    pub fn prev_window(&mut self) {
        self.window_cursor = wrap_prev(self.window_cursor, self.windows.len());
        self.revision += 1;
    }

    /// Records a refresh request, merging it into any pending one.
    ///
    /// The newest target wins and `force` is sticky until the timer fires.
    /// `immediate` arms a zero-length timer.
    pub fn request_refresh(&mut self, session_name: &str, force: bool, immediate: bool, now: Instant) {
        let force = force || self.pending.as_ref().is_some_and(|pending| pending.force);
        let delay = if immediate {
            Duration::ZERO
        } else {
            self.debounce
        };
        debug!(session = %session_name, force, immediate, "refresh requested");
        self.pending = Some(PendingRefresh {
            target: session_name.to_string(),
            force,
            deadline: now + delay,
        });
    }

    /// Fires the debounce timer if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<WindowFetch> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;

        let highlighted = self.highlighted_session().map(|session| session.name.as_str());
        if highlighted != Some(pending.target.as_str()) {
            debug!(session = %pending.target, "highlight moved before timer fired");
            return None;
        }
        if !pending.force && self.current_session.as_deref() == Some(pending.target.as_str()) {
            debug!(session = %pending.target, "windows already loaded");
            return None;
        }

        self.latest_token += 1;
        self.in_flight = true;
        debug!(session = %pending.target, token = self.latest_token, "dispatching window fetch");
        Some(WindowFetch {
            token: self.latest_token,
            session: pending.target,
        })
    }

    /// Applies a finished fetch if it is still the one that matters.
    pub fn complete(&mut self, result: FetchResult) -> FetchDisposition {
        if result.token != self.latest_token || result.token <= self.stale_through {
            debug!(token = result.token, latest = self.latest_token, "discarding superseded fetch");
            return FetchDisposition::Superseded;
        }
        self.in_flight = false;

        let highlighted = self.highlighted_session().map(|session| session.name.as_str());
        if highlighted != Some(result.session.as_str()) {
            debug!(session = %result.session, "discarding fetch for unhighlighted session");
            return FetchDisposition::SelectionMoved;
        }

        match result.outcome {
            Ok(windows) => {
                debug!(session = %result.session, count = windows.len(), "committing windows");
                self.window_cursor = if windows.is_empty() { None } else { Some(0) };
                self.windows = windows;
            }
            Err(err) => {
                warn!(session = %result.session, error = %err, "window fetch failed");
                self.windows.clear();
                self.window_cursor = None;
                self.status = StatusLine::error(err.to_string());
            }
        }
        self.current_session = Some(result.session);
        self.revision += 1;
        FetchDisposition::Committed
    }
}

fn wrap_next(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(idx) => (idx + 1) % len,
        None => 0,
    })
}

fn wrap_prev(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(0) | None => len - 1,
        Some(idx) => idx - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{inventory_runner, ScriptedRunner};
    use std::sync::Arc;

    const TWO_SESSIONS: &str = "vite\t1\tWed Dec 31 15:35:55 2025\t1\nsbt\t2\tWed Dec 31 15:35:33 2025\t0";

    fn coordinator(runner: &Arc<ScriptedRunner>) -> Coordinator {
        Coordinator::new(TmuxClient::new(runner.clone(), false), DEFAULT_DEBOUNCE)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn window(id: &str, name: &str) -> Window {
        Window {
            id: id.to_string(),
            name: name.to_string(),
            index: 0,
            active: true,
        }
    }

    /// Loads the inventory and commits the first session's windows.
    fn loaded(runner: &Arc<ScriptedRunner>, t0: Instant) -> Coordinator {
        let mut coord = coordinator(runner);
        coord.refresh_data(t0);
        let fetch = coord.fire_due(t0 + DEFAULT_DEBOUNCE).expect("initial fetch");
        let result = fetch.run(coord.client());
        assert_eq!(coord.complete(result), FetchDisposition::Committed);
        coord
    }

    #[test]
    fn refresh_data_loads_sorted_sessions_and_debounces_first() {
        let runner = inventory_runner(TWO_SESSIONS);
        let mut coord = coordinator(&runner);
        let t0 = Instant::now();

        coord.refresh_data(t0);

        let names: Vec<&str> = coord.sessions().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["sbt", "vite"]);
        assert_eq!(coord.highlighted_session().map(|s| s.name.as_str()), Some("sbt"));
        assert_eq!(coord.status(), &StatusLine::info("Loaded tmux sessions."));
        assert_eq!(coord.phase(), SyncPhase::Debouncing);
        assert_eq!(coord.next_deadline(), Some(t0 + DEFAULT_DEBOUNCE));
        assert_eq!(runner.calls_to("list-windows"), 0);
        assert!(coord.fire_due(t0 + ms(79)).is_none());
    }

    #[test]
    fn first_fetch_commits_windows_and_current_session() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let coord = loaded(&runner, t0);

        assert_eq!(coord.current_session(), Some("sbt"));
        assert_eq!(coord.windows(), &[window("@sbt", "sbt-main")]);
        assert_eq!(coord.selected_window().map(|w| w.id.as_str()), Some("@sbt"));
        assert_eq!(coord.phase(), SyncPhase::Idle);
        assert_eq!(runner.calls_to("list-windows"), 1);
    }

    #[test]
    fn rapid_navigation_collapses_into_one_fetch_for_last_target() {
        let runner = inventory_runner("dev\t1\tx\t0\nops\t1\tx\t0\nweb\t1\tx\t0");
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);
        let t1 = t0 + ms(500);

        coord.next_session(t1);
        coord.next_session(t1 + ms(30));
        assert!(coord.fire_due(t1 + ms(80)).is_none());

        let fetch = coord.fire_due(t1 + ms(110)).expect("fetch after quiet period");
        assert_eq!(fetch.session, "web");
        assert!(coord.fire_due(t1 + ms(500)).is_none());
    }

    #[test]
    fn noop_refresh_for_current_session_runs_nothing() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);
        let before = runner.calls_to("list-windows");

        coord.request_refresh("sbt", false, false, t0 + ms(200));
        assert!(coord.fire_due(t0 + ms(400)).is_none());
        assert_eq!(runner.calls_to("list-windows"), before);
        assert_eq!(coord.phase(), SyncPhase::Idle);
    }

    #[test]
    fn forced_refresh_for_current_session_runs_once() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);
        let before = runner.calls_to("list-windows");

        coord.request_refresh("sbt", true, false, t0 + ms(200));
        let fetch = coord.fire_due(t0 + ms(280)).expect("forced fetch");
        let result = fetch.run(coord.client());
        assert_eq!(coord.complete(result), FetchDisposition::Committed);
        assert!(coord.fire_due(t0 + ms(1_000)).is_none());
        assert_eq!(runner.calls_to("list-windows"), before + 1);
    }

    #[test]
    fn force_is_sticky_across_collapsed_requests() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);

        coord.request_refresh("sbt", true, false, t0 + ms(200));
        coord.request_refresh("sbt", false, false, t0 + ms(210));
        let fetch = coord.fire_due(t0 + ms(290)).expect("force survives merge");
        assert_eq!(fetch.session, "sbt");
    }

    #[test]
    fn force_survives_a_detour_through_another_target() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);
        assert_eq!(coord.current_session(), Some("sbt"));
        let t1 = t0 + ms(500);

        coord.request_refresh("sbt", true, true, t1);
        coord.next_session(t1);
        coord.prev_session(t1 + ms(10));
        assert!(coord.fire_due(t1 + ms(10)).is_none());

        let fetch = coord
            .fire_due(t1 + ms(10) + DEFAULT_DEBOUNCE)
            .expect("forced fetch of the loaded session");
        assert_eq!(fetch.session, "sbt");
        let result = fetch.run(coord.client());
        assert_eq!(coord.complete(result), FetchDisposition::Committed);
        assert_eq!(runner.calls_to("list-windows"), 2);
    }

    #[test]
    fn immediate_request_fires_without_delay() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);
        let t1 = t0 + ms(300);

        coord.request_refresh("sbt", true, true, t1);
        assert_eq!(coord.next_deadline(), Some(t1));
        assert!(coord.fire_due(t1).is_some());
    }

    #[test]
    fn timer_drops_request_when_highlight_moved_elsewhere() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);

        coord.request_refresh("vite", true, false, t0 + ms(200));
        assert!(coord.fire_due(t0 + ms(300)).is_none());
        assert_eq!(coord.phase(), SyncPhase::Idle);
        assert_eq!(runner.calls_to("list-windows"), 1);
    }

    #[test]
    fn older_fetch_finishing_last_is_discarded() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);

        coord.request_refresh("sbt", true, true, t0 + ms(200));
        let first = coord.fire_due(t0 + ms(200)).expect("first");
        coord.request_refresh("sbt", true, true, t0 + ms(210));
        let second = coord.fire_due(t0 + ms(210)).expect("second");
        assert!(second.token > first.token);
        assert_eq!(coord.phase(), SyncPhase::Fetching);

        let newer = FetchResult {
            token: second.token,
            session: second.session,
            outcome: Ok(vec![window("@2", "new")]),
        };
        let older = FetchResult {
            token: first.token,
            session: first.session,
            outcome: Ok(vec![window("@1", "old")]),
        };
        assert_eq!(coord.complete(newer), FetchDisposition::Committed);
        assert_eq!(coord.complete(older), FetchDisposition::Superseded);
        assert_eq!(coord.windows(), &[window("@2", "new")]);
        assert_eq!(coord.phase(), SyncPhase::Idle);
    }

    #[test]
    fn result_for_unhighlighted_session_changes_nothing() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);

        coord.next_session(t0 + ms(200));
        let fetch = coord.fire_due(t0 + ms(280)).expect("fetch vite");
        coord.prev_session(t0 + ms(290));

        let revision = coord.revision();
        let result = FetchResult {
            token: fetch.token,
            session: fetch.session,
            outcome: Ok(vec![window("@9", "vite-main")]),
        };
        assert_eq!(coord.complete(result), FetchDisposition::SelectionMoved);
        assert_eq!(coord.current_session(), Some("sbt"));
        assert_eq!(coord.windows(), &[window("@sbt", "sbt-main")]);
        assert_eq!(coord.revision(), revision);
    }

    #[test]
    fn failed_fetch_for_unhighlighted_session_is_silent() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);
        let status = coord.status().clone();

        coord.next_session(t0 + ms(200));
        let fetch = coord.fire_due(t0 + ms(280)).expect("fetch vite");
        coord.prev_session(t0 + ms(290));

        let result = FetchResult {
            token: fetch.token,
            session: fetch.session,
            outcome: Err(TmuxError::command_failed("can't find session: vite")),
        };
        assert_eq!(coord.complete(result), FetchDisposition::SelectionMoved);
        assert_eq!(coord.status(), &status);
        assert_eq!(coord.current_session(), Some("sbt"));
    }

    #[test]
    fn failed_fetch_clears_windows_and_still_marks_current() {
        let runner = ScriptedRunner::new(|args| match args[0].as_str() {
            "list-sessions" => Ok("dev\t1\tx\t0".to_string()),
            _ => Err(TmuxError::command_failed("can't find session: dev")),
        });
        let t0 = Instant::now();
        let mut coord = coordinator(&runner);
        coord.refresh_data(t0);
        let fetch = coord.fire_due(t0 + DEFAULT_DEBOUNCE).expect("fetch");
        let result = fetch.run(coord.client());

        assert_eq!(coord.complete(result), FetchDisposition::Committed);
        assert!(coord.windows().is_empty());
        assert_eq!(coord.selected_window(), None);
        assert_eq!(coord.status(), &StatusLine::error("can't find session: dev"));
        assert_eq!(coord.current_session(), Some("dev"));

        coord.request_refresh("dev", false, false, t0 + ms(500));
        assert!(coord.fire_due(t0 + ms(600)).is_none());
        assert_eq!(runner.calls_to("list-windows"), 1);
    }

    #[test]
    fn parse_failure_is_surfaced_and_coordinator_stays_usable() {
        let runner = ScriptedRunner::new(|args| match args[0].as_str() {
            "list-sessions" => Ok("a\t1\tx\t0\nb\t1\tx\t0".to_string()),
            _ if args[2] == "a" => Ok("@1\tbroken".to_string()),
            _ => Ok("@2\tfine\t0\t1".to_string()),
        });
        let t0 = Instant::now();
        let mut coord = coordinator(&runner);
        coord.refresh_data(t0);
        let fetch = coord.fire_due(t0 + DEFAULT_DEBOUNCE).expect("fetch a");
        let result = fetch.run(coord.client());
        assert_eq!(coord.complete(result), FetchDisposition::Committed);
        assert!(coord.status().is_error);
        assert!(coord.windows().is_empty());

        coord.next_session(t0 + ms(200));
        let fetch = coord.fire_due(t0 + ms(280)).expect("fetch b");
        let result = fetch.run(coord.client());
        assert_eq!(coord.complete(result), FetchDisposition::Committed);
        assert_eq!(coord.windows().len(), 1);
        assert_eq!(coord.current_session(), Some("b"));
    }

    #[test]
    fn refresh_data_makes_in_flight_fetches_stale() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);

        coord.request_refresh("sbt", true, true, t0 + ms(200));
        let fetch = coord.fire_due(t0 + ms(200)).expect("fetch");
        coord.refresh_data(t0 + ms(210));
        assert!(coord.windows().is_empty());
        assert_eq!(coord.current_session(), None);

        let result = fetch.run(coord.client());
        assert_eq!(coord.complete(result), FetchDisposition::Superseded);
        assert!(coord.windows().is_empty());
    }

    #[test]
    fn refresh_data_failure_clears_everything() {
        let runner = ScriptedRunner::new(|_| {
            Err(TmuxError::Unavailable {
                binary: "tmux".to_string(),
            })
        });
        let mut coord = coordinator(&runner);
        coord.refresh_data(Instant::now());

        assert!(coord.sessions().is_empty());
        assert!(coord.windows().is_empty());
        assert_eq!(coord.highlighted_session(), None);
        assert_eq!(
            coord.status(),
            &StatusLine::error("tmux is not installed or not on PATH")
        );
        assert_eq!(coord.phase(), SyncPhase::Idle);
    }

    #[test]
    fn no_server_is_an_empty_inventory_not_an_error() {
        let runner = ScriptedRunner::new(|_| {
            Err(TmuxError::command_failed(
                "no server running on /tmp/tmux-1000/default",
            ))
        });
        let mut coord = coordinator(&runner);
        coord.refresh_data(Instant::now());

        assert!(coord.sessions().is_empty());
        assert_eq!(coord.status(), &StatusLine::info("No tmux sessions found."));
        assert_eq!(coord.next_deadline(), None);
    }

    #[test]
    fn reselecting_same_row_is_not_a_navigation_event() {
        let runner = inventory_runner(TWO_SESSIONS);
        let t0 = Instant::now();
        let mut coord = loaded(&runner, t0);

        coord.select_session(0, t0 + ms(200));
        coord.select_session(7, t0 + ms(200));
        assert_eq!(coord.next_deadline(), None);
    }

    #[test]
    fn window_cursor_wraps() {
        let runner = ScriptedRunner::new(|args| match args[0].as_str() {
            "list-sessions" => Ok("dev\t3\tx\t0".to_string()),
            _ => Ok("@1\ta\t0\t1\n@2\tb\t1\t0\n@3\tc\t2\t0".to_string()),
        });
        let coord = &mut loaded(&runner, Instant::now());

        assert_eq!(coord.selected_window().map(|w| w.id.as_str()), Some("@1"));
        coord.prev_window();
        assert_eq!(coord.selected_window().map(|w| w.id.as_str()), Some("@3"));
        coord.next_window();
        assert_eq!(coord.selected_window().map(|w| w.id.as_str()), Some("@1"));
    }
}
