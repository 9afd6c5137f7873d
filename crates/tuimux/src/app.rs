use crate::palette::{Action, PaletteState};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::mem;
use std::time::Instant;
use tracing::{debug, info, warn};
use tuimux_core::{AttachMode, Coordinator, FetchDisposition, FetchResult, Window};

pub const PREVIEW_LINES: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Sessions,
    Windows,
}

/// What a submitted prompt should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptIntent {
    NewSession,
    RenameSession { from: String },
    NewWindow { session: String },
    RenameWindow { session: String, window_id: String, from: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub placeholder: String,
    pub input: String,
    pub allow_empty: bool,
    pub intent: PromptIntent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub body: String,
    pub scroll: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Prompt(Prompt),
    ConfirmAttach { session: String },
    Palette(PaletteState),
    Preview(Preview),
    Help,
}

pub struct App {
    pub coordinator: Coordinator,
    pub focus: Focus,
    pub mode: Mode,
    pending_attach: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(coordinator: Coordinator) -> Self {
        Self {
            coordinator,
            focus: Focus::Sessions,
            mode: Mode::Normal,
            pending_attach: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The session to attach once the terminal has been restored.
    pub fn take_pending_attach(&mut self) -> Option<String> {
        self.pending_attach.take()
    }

    pub fn apply_fetch(&mut self, result: FetchResult) -> FetchDisposition {
        let disposition = self.coordinator.complete(result);
        if disposition != FetchDisposition::Committed {
            debug!(?disposition, "window fetch not applied");
        }
        disposition
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        if let Event::Key(key) = event {
            if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                handle_key(self, key, now);
            }
        }
    }

    pub fn run_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Attach => self.attach_highlighted(),
            Action::Refresh => self.refresh(now),
            Action::NewSession => self.open_prompt(
                "New session",
                "Session name",
                String::new(),
                false,
                PromptIntent::NewSession,
            ),
            Action::RenameSession => {
                let Some(name) = self.highlighted_name() else {
                    self.coordinator.set_error("Select a session to rename.");
                    return;
                };
                self.open_prompt(
                    "Rename session",
                    "New session name",
                    name.clone(),
                    false,
                    PromptIntent::RenameSession { from: name },
                );
            }
            Action::NewWindow => {
                let Some(session) = self.highlighted_name() else {
                    self.coordinator.set_error("Select a session first.");
                    return;
                };
                self.open_prompt(
                    &format!("New window in {session}"),
                    "Window name (optional)",
                    String::new(),
                    true,
                    PromptIntent::NewWindow { session },
                );
            }
            Action::RenameWindow => {
                let Some((session, window)) = self.loaded_window("rename") else {
                    return;
                };
                self.open_prompt(
                    "Rename window",
                    "New window name",
                    window.name.clone(),
                    false,
                    PromptIntent::RenameWindow {
                        session,
                        window_id: window.id,
                        from: window.name,
                    },
                );
            }
            Action::KillSession => self.kill_session(now),
            Action::KillWindow => self.kill_window(now),
            Action::PreviewWindow => self.preview_window(),
            Action::Help => self.mode = Mode::Help,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Dispatches a closed prompt to its intent.
    pub fn resolve_prompt(&mut self, intent: PromptIntent, outcome: PromptOutcome, now: Instant) {
        let PromptOutcome::Submitted(value) = outcome else {
            debug!(?intent, "prompt cancelled");
            return;
        };
        let client = self.coordinator.client().clone();
        match intent {
            PromptIntent::NewSession => match client.new_session(&value) {
                Ok(()) => {
                    self.reload_with_status(now, format!("Created session {value}."));
                }
                Err(err) => self.coordinator.set_error(err.to_string()),
            },
            PromptIntent::RenameSession { from } => {
                if value == from {
                    self.coordinator.set_status("Session name unchanged.");
                    return;
                }
                match client.rename_session(&from, &value) {
                    Ok(()) => {
                        self.reload_with_status(now, format!("Renamed session {from} to {value}."));
                    }
                    Err(err) => self.coordinator.set_error(err.to_string()),
                }
            }
            PromptIntent::NewWindow { session } => {
                let name = Some(value.as_str()).filter(|name| !name.is_empty());
                match client.new_window(&session, name) {
                    Ok(()) => {
                        self.coordinator.set_status(format!("Created window in {session}."));
                        self.coordinator.request_refresh(&session, true, true, now);
                    }
                    Err(err) => self.coordinator.set_error(err.to_string()),
                }
            }
            PromptIntent::RenameWindow {
                session,
                window_id,
                from,
            } => {
                if value == from {
                    self.coordinator.set_status("Window name unchanged.");
                    return;
                }
                match client.rename_window(&window_id, &value) {
                    Ok(()) => {
                        self.coordinator
                            .set_status(format!("Renamed window {from} to {value}."));
                        self.coordinator.request_refresh(&session, true, true, now);
                    }
                    Err(err) => self.coordinator.set_error(err.to_string()),
                }
            }
        }
    }

    /// Suspends the dashboard until the attached client detaches.
    pub fn confirm_attach(&mut self, session: String) {
        info!(session = %session, "leaving dashboard to attach");
        self.pending_attach = Some(session);
    }

    pub fn has_pending_attach(&self) -> bool {
        self.pending_attach.is_some()
    }

    /// Back from `tmux attach`; tmux state may have changed meanwhile.
    pub fn finish_attach(&mut self, session: &str, outcome: tuimux_core::Result<()>, now: Instant) {
        self.refresh(now);
        match outcome {
            Ok(()) => {
                if !self.coordinator.status().is_error {
                    self.coordinator
                        .set_status(format!("Detached from {session}."));
                }
            }
            Err(err) => {
                warn!(session = %session, error = %err, "attach failed");
                self.coordinator.set_error(err.to_string());
            }
        }
    }

    fn highlighted_name(&self) -> Option<String> {
        self.coordinator
            .highlighted_session()
            .map(|session| session.name.clone())
    }

    /// The selected window and the session its list was loaded for.
    ///
    /// Refused while the list still belongs to a session other than the
    /// highlighted one.
    fn loaded_window(&mut self, verb: &str) -> Option<(String, Window)> {
        let highlighted = self.highlighted_name();
        let loaded = self.coordinator.current_session().map(str::to_string);
        let window = self.coordinator.selected_window().cloned();
        match (highlighted, loaded, window) {
            (Some(highlighted), Some(loaded), Some(window)) if highlighted == loaded => {
                Some((loaded, window))
            }
            (Some(highlighted), Some(_), Some(_)) => {
                self.coordinator
                    .set_error(format!("Windows for {highlighted} are still loading."));
                None
            }
            _ => {
                self.coordinator
                    .set_error(format!("Select a window to {verb}."));
                None
            }
        }
    }

    fn open_prompt(
        &mut self,
        title: &str,
        placeholder: &str,
        input: String,
        allow_empty: bool,
        intent: PromptIntent,
    ) {
        self.mode = Mode::Prompt(Prompt {
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            input,
            allow_empty,
            intent,
        });
    }

    fn refresh(&mut self, now: Instant) {
        self.coordinator.refresh_data(now);
        if self.coordinator.highlighted_session().is_none() {
            self.focus = Focus::Sessions;
        }
    }

    fn reload_with_status(&mut self, now: Instant, message: String) {
        self.refresh(now);
        if !self.coordinator.status().is_error {
            self.coordinator.set_status(message);
        }
    }

    fn attach_highlighted(&mut self) {
        match self.highlighted_name() {
            Some(session) => self.attach_session(session),
            None => self.coordinator.set_error("Select a session to attach."),
        }
    }

    fn attach_session(&mut self, session: String) {
        match self.coordinator.client().attach_mode() {
            AttachMode::Attach => self.mode = Mode::ConfirmAttach { session },
            AttachMode::Switch => match self.coordinator.client().switch_client(&session) {
                Ok(()) => self.coordinator.set_status(format!("Switched to {session}.")),
                Err(err) => self.coordinator.set_error(err.to_string()),
            },
        }
    }

    fn activate_window(&mut self) {
        let Some((session, window)) = self.loaded_window("open") else {
            return;
        };
        match self.coordinator.client().select_window(&window.id) {
            Ok(()) => self.attach_session(session),
            Err(err) => self.coordinator.set_error(err.to_string()),
        }
    }

    fn kill_session(&mut self, now: Instant) {
        let Some(session) = self.highlighted_name() else {
            self.coordinator.set_error("Select a session to kill.");
            return;
        };
        match self.coordinator.client().kill_session(&session) {
            Ok(()) => self.reload_with_status(now, format!("Killed session {session}.")),
            Err(err) => self.coordinator.set_error(err.to_string()),
        }
    }

    fn kill_window(&mut self, now: Instant) {
        let Some((session, window)) = self.loaded_window("kill") else {
            return;
        };
        match self.coordinator.client().kill_window(&window.id) {
            Ok(()) => {
                self.coordinator
                    .set_status(format!("Killed window {}.", window.name));
                self.coordinator.request_refresh(&session, true, true, now);
            }
            Err(err) => self.coordinator.set_error(err.to_string()),
        }
    }

    fn preview_window(&mut self) {
        let Some((session, window)) = self.loaded_window("preview") else {
            return;
        };
        match self
            .coordinator
            .client()
            .capture_window(&window.id, PREVIEW_LINES)
        {
            Ok(body) => {
                self.mode = Mode::Preview(Preview {
                    title: format!("{session}:{} {}", window.index, window.name),
                    body,
                    scroll: 0,
                });
            }
            Err(err) => self.coordinator.set_error(err.to_string()),
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    match app.mode {
        Mode::Normal => handle_key_normal(app, key, now),
        Mode::Prompt(_) => handle_key_prompt(app, key, now),
        Mode::ConfirmAttach { .. } => handle_key_confirm(app, key),
        Mode::Palette(_) => handle_key_palette(app, key, now),
        Mode::Preview(_) => handle_key_preview(app, key),
        Mode::Help => handle_key_help(app, key),
    }
}

fn handle_key_normal(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.mode = Mode::Palette(PaletteState::default());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            if app.focus == Focus::Windows {
                app.focus = Focus::Sessions;
            }
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Sessions => Focus::Windows,
                Focus::Windows => Focus::Sessions,
            };
        }
        KeyCode::Char('j') | KeyCode::Down => match app.focus {
            Focus::Sessions => app.coordinator.next_session(now),
            Focus::Windows => app.coordinator.next_window(),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.focus {
            Focus::Sessions => app.coordinator.prev_session(now),
            Focus::Windows => app.coordinator.prev_window(),
        },
        KeyCode::Enter => match app.focus {
            Focus::Sessions => app.run_action(Action::Attach, now),
            Focus::Windows => app.activate_window(),
        },
        KeyCode::Char('a') => app.run_action(Action::Attach, now),
        KeyCode::Char('r') => app.run_action(Action::Refresh, now),
        KeyCode::Char('n') => app.run_action(Action::NewSession, now),
        KeyCode::Char('e') => app.run_action(Action::RenameSession, now),
        KeyCode::Char('c') => app.run_action(Action::NewWindow, now),
        KeyCode::Char('w') => app.run_action(Action::RenameWindow, now),
        KeyCode::Char('x') => app.run_action(Action::KillSession, now),
        KeyCode::Char('d') => app.run_action(Action::KillWindow, now),
        KeyCode::Char('p') => app.run_action(Action::PreviewWindow, now),
        KeyCode::Char('h') | KeyCode::Char('?') => app.run_action(Action::Help, now),
        KeyCode::Char(':') => app.mode = Mode::Palette(PaletteState::default()),
        _ => {}
    }
}

fn handle_key_prompt(app: &mut App, key: KeyEvent, now: Instant) {
    let Mode::Prompt(prompt) = &mut app.mode else {
        return;
    };
    match key.code {
        KeyCode::Backspace => {
            prompt.input.pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            prompt.input.push(ch);
        }
        KeyCode::Enter | KeyCode::Esc => {
            let Mode::Prompt(prompt) = mem::replace(&mut app.mode, Mode::Normal) else {
                return;
            };
            let value = prompt.input.trim().to_string();
            let outcome = if key.code == KeyCode::Esc || (value.is_empty() && !prompt.allow_empty)
            {
                PromptOutcome::Cancelled
            } else {
                PromptOutcome::Submitted(value)
            };
            app.resolve_prompt(prompt.intent, outcome, now);
        }
        _ => {}
    }
}

fn handle_key_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('a') => {
            if let Mode::ConfirmAttach { session } = mem::replace(&mut app.mode, Mode::Normal) {
                app.confirm_attach(session);
            }
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => app.mode = Mode::Normal,
        _ => {}
    }
}

fn handle_key_palette(app: &mut App, key: KeyEvent, now: Instant) {
    let Mode::Palette(palette) = &mut app.mode else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.mode = Mode::Normal,
        KeyCode::Down => palette.next(),
        KeyCode::Up => palette.prev(),
        KeyCode::Backspace => palette.pop(),
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => palette.next(),
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => palette.prev(),
        KeyCode::Char(ch) => palette.push(ch),
        KeyCode::Enter => {
            let action = palette.selected_action();
            app.mode = Mode::Normal;
            if let Some(action) = action {
                app.run_action(action, now);
            }
        }
        _ => {}
    }
}

fn handle_key_preview(app: &mut App, key: KeyEvent) {
    let Mode::Preview(preview) = &mut app.mode else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('p') => {
            app.mode = Mode::Normal;
        }
        KeyCode::Char('j') | KeyCode::Down => preview.scroll = preview.scroll.saturating_add(1),
        KeyCode::Char('k') | KeyCode::Up => preview.scroll = preview.scroll.saturating_sub(1),
        KeyCode::PageDown => preview.scroll = preview.scroll.saturating_add(10),
        KeyCode::PageUp => preview.scroll = preview.scroll.saturating_sub(10),
        KeyCode::Home => preview.scroll = 0,
        _ => {}
    }
}

fn handle_key_help(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('h')
        | KeyCode::Char('?') => app.mode = Mode::Normal,
        _ => {}
    }
}
