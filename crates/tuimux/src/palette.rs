#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Attach,
    Refresh,
    NewSession,
    RenameSession,
    NewWindow,
    RenameWindow,
    KillSession,
    KillWindow,
    PreviewWindow,
    Help,
    Quit,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Action::Attach,
        Action::Refresh,
        Action::NewSession,
        Action::RenameSession,
        Action::NewWindow,
        Action::RenameWindow,
        Action::KillSession,
        Action::KillWindow,
        Action::PreviewWindow,
        Action::Help,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Attach => "Attach / switch session",
            Action::Refresh => "Refresh",
            Action::NewSession => "New session",
            Action::RenameSession => "Rename session",
            Action::NewWindow => "New window",
            Action::RenameWindow => "Rename window",
            Action::KillSession => "Kill session",
            Action::KillWindow => "Kill window",
            Action::PreviewWindow => "Preview window",
            Action::Help => "Help",
            Action::Quit => "Quit",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Action::Attach => "Attach to the selected session (detach with Ctrl-b d).",
            Action::Refresh => "Reload sessions and windows.",
            Action::NewSession => "Create a new tmux session.",
            Action::RenameSession => "Rename the selected session.",
            Action::NewWindow => "Create a new window in the selected session.",
            Action::RenameWindow => "Rename the selected window.",
            Action::KillSession => "Kill the selected session.",
            Action::KillWindow => "Kill the selected window.",
            Action::PreviewWindow => "Show the last lines of the selected window.",
            Action::Help => "Open the help screen.",
            Action::Quit => "Leave the dashboard.",
        }
    }
}

/// Case-insensitive subsequence match.
pub fn fuzzy_match(query: &str, candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let mut chars = candidate.chars();
    query
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .all(|wanted| chars.any(|ch| ch == wanted))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteState {
    pub query: String,
    pub selected: usize,
}

impl PaletteState {
    pub fn matches(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| fuzzy_match(&self.query, action.label()))
            .collect()
    }

    pub fn selected_action(&self) -> Option<Action> {
        self.matches().get(self.selected).copied()
    }

    pub fn push(&mut self, ch: char) {
        self.query.push(ch);
        self.selected = 0;
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn next(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }
}
