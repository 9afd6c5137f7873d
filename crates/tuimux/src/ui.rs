use crate::app::{App, Focus, Mode, Preview, Prompt};
use crate::palette::PaletteState;
use crate::theme::{self, icons};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tuimux_core::{Session, Snapshot, StatusLine, SyncPhase, Window};

const HELP_ROWS: &[(&str, &str)] = &[
    ("Up/Down, j/k", "Move within the focused panel"),
    ("Tab", "Switch between sessions and windows"),
    ("Enter", "Attach / switch (selects the window first in the windows panel)"),
    ("r", "Refresh sessions and windows"),
    ("n", "New session"),
    ("e", "Rename session"),
    ("x", "Kill session"),
    ("c", "New window"),
    ("w", "Rename window"),
    ("d", "Kill window"),
    ("p", "Preview window"),
    (": / Ctrl-p", "Command palette"),
    ("h / ?", "This help"),
    ("q", "Quit"),
];

pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.size());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let snapshot = app.coordinator.snapshot();
    render_sessions(frame, columns[0], &snapshot, app.focus == Focus::Sessions);
    render_windows(frame, columns[1], &snapshot, app.focus == Focus::Windows);
    render_status(frame, rows[1], snapshot.status);
    render_footer(frame, rows[2]);

    match &app.mode {
        Mode::Normal => {}
        Mode::Prompt(prompt) => draw_prompt_modal(frame, prompt),
        Mode::ConfirmAttach { session } => draw_confirm_modal(frame, session),
        Mode::Palette(palette) => draw_palette_modal(frame, palette),
        Mode::Preview(preview) => draw_preview_modal(frame, preview),
        Mode::Help => draw_help_modal(frame),
    }
}

pub fn session_label(session: &Session) -> String {
    let noun = if session.window_count == 1 {
        "window"
    } else {
        "windows"
    };
    let mut label = format!(
        "{}: {} {noun} (created {})",
        session.name, session.window_count, session.created
    );
    if session.attached {
        label.push_str(" (attached)");
    }
    label
}

pub fn window_label(window: &Window) -> String {
    let marker = if window.active { icons::ACTIVE } else { " " };
    format!("{marker} {}: {}", window.index, window.name)
}

fn render_sessions(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>, focused: bool) {
    let items: Vec<ListItem> = snapshot
        .sessions
        .iter()
        .map(|session| {
            let style = if session.attached {
                theme::ATTACHED_STYLE
            } else {
                Style::new().fg(theme::TEXT)
            };
            ListItem::new(Line::from(Span::styled(session_label(session), style)))
        })
        .collect();
    let title = format!("Sessions ({})", snapshot.sessions.len());
    let list = List::new(items)
        .block(titled_block(&title, focused))
        .highlight_style(theme::highlight_style(focused))
        .highlight_symbol(icons::CURSOR);
    let mut state = ListState::default().with_selected(snapshot.selected_session);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_windows(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>, focused: bool) {
    let items: Vec<ListItem> = snapshot
        .windows
        .iter()
        .map(|window| ListItem::new(window_label(window)))
        .collect();
    let mut title = match snapshot.current_session {
        Some(session) => format!("Windows: {session}"),
        None => "Windows".to_string(),
    };
    if snapshot.phase != SyncPhase::Idle {
        title.push_str(" (loading)");
    }
    let list = List::new(items)
        .block(titled_block(&title, focused))
        .highlight_style(theme::highlight_style(focused))
        .highlight_symbol(icons::CURSOR);
    let mut state = ListState::default().with_selected(snapshot.selected_window);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status(frame: &mut Frame, area: Rect, status: &StatusLine) {
    let style = if status.is_error {
        theme::ERROR_STYLE
    } else {
        theme::STATUS_STYLE
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(status.text.as_str(), style)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::BORDER_IDLE)
                .title(Span::styled("Status", theme::HINT_STYLE)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, label) in [
        ("Enter", "attach"),
        ("Tab", "panel"),
        ("r", "refresh"),
        ("n", "new"),
        ("d", "kill window"),
        (":", "palette"),
        ("?", "help"),
        ("q", "quit"),
    ] {
        spans.push(keycap(key));
        spans.push(Span::styled(format!(" {label}  "), theme::HINT_STYLE));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_prompt_modal(frame: &mut Frame, prompt: &Prompt) {
    let area = centered_rect(60, 20, frame.size());
    frame.render_widget(Clear, area);
    let input = if prompt.input.is_empty() {
        Span::styled(prompt.placeholder.as_str(), theme::HINT_STYLE)
    } else {
        Span::raw(prompt.input.as_str())
    };
    let lines = vec![
        Line::from(vec![input, Span::styled("_", theme::KEYCAP_STYLE)]),
        Line::from(""),
        Line::from(vec![
            keycap("Enter"),
            Span::styled(" submit  ", theme::HINT_STYLE),
            keycap("Esc"),
            Span::styled(" cancel", theme::HINT_STYLE),
        ]),
    ];
    let paragraph = Paragraph::new(lines).block(titled_block(&prompt.title, true));
    frame.render_widget(paragraph, area);
}

fn draw_confirm_modal(frame: &mut Frame, session: &str) {
    let area = centered_rect(60, 30, frame.size());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(vec![
            Span::raw("Attach to "),
            Span::styled(session, theme::TITLE_STYLE),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "tmux takes over this terminal until you detach.",
            theme::HINT_STYLE,
        )),
        Line::from(Span::styled(
            "Detach with Ctrl-b d to return to the dashboard.",
            theme::HINT_STYLE,
        )),
        Line::from(""),
        Line::from(vec![
            keycap("Enter"),
            Span::styled(" attach  ", theme::HINT_STYLE),
            keycap("Esc"),
            Span::styled(" cancel", theme::HINT_STYLE),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .block(titled_block("Attach session", true))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_palette_modal(frame: &mut Frame, palette: &PaletteState) {
    let area = centered_rect(60, 60, frame.size());
    frame.render_widget(Clear, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let query = Paragraph::new(Line::from(vec![
        Span::styled(": ", theme::KEYCAP_STYLE),
        Span::raw(palette.query.as_str()),
        Span::styled("_", theme::KEYCAP_STYLE),
    ]))
    .block(titled_block("Command palette", true));
    frame.render_widget(query, rows[0]);

    let matches = palette.matches();
    let items: Vec<ListItem> = matches
        .iter()
        .map(|action| {
            ListItem::new(Line::from(vec![
                Span::styled(action.label(), Style::new().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", action.help()), theme::HINT_STYLE),
            ]))
        })
        .collect();
    let selected = (!matches.is_empty()).then_some(palette.selected);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::BORDER_FOCUSED),
        )
        .highlight_style(theme::highlight_style(true))
        .highlight_symbol(icons::CURSOR);
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, rows[1], &mut state);
}

fn draw_preview_modal(frame: &mut Frame, preview: &Preview) {
    let area = centered_rect(80, 70, frame.size());
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(preview.body.as_str())
        .block(titled_block(&preview.title, true))
        .scroll((preview.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_help_modal(frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.size());
    frame.render_widget(Clear, area);
    let mut lines: Vec<Line> = HELP_ROWS
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("{key:<14}"), theme::KEYCAP_STYLE),
                Span::raw(*description),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Inside tmux, Enter switches the current client instead of attaching.",
        theme::HINT_STYLE,
    )));
    let paragraph = Paragraph::new(lines)
        .block(titled_block("Help", true))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn titled_block(title: &str, focused: bool) -> Block<'_> {
    let (title_style, border_style) = if focused {
        (theme::TITLE_STYLE, theme::BORDER_FOCUSED)
    } else {
        (theme::HINT_STYLE, theme::BORDER_IDLE)
    };
    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn keycap(label: &str) -> Span<'_> {
    Span::styled(format!("[{label}]"), theme::KEYCAP_STYLE)
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    horizontal[1]
}
