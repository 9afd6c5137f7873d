use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(139, 213, 255);
pub const MUTED: Color = Color::Rgb(123, 138, 161);
pub const TEXT: Color = Color::Rgb(230, 238, 249);
pub const ERROR: Color = Color::Rgb(255, 155, 133);

pub const TITLE_STYLE: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
pub const BORDER_FOCUSED: Style = Style::new().fg(ACCENT);
pub const BORDER_IDLE: Style = Style::new().fg(MUTED);
pub const KEYCAP_STYLE: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
pub const HINT_STYLE: Style = Style::new().fg(MUTED);
pub const STATUS_STYLE: Style = Style::new().fg(TEXT);
pub const ERROR_STYLE: Style = Style::new().fg(ERROR).add_modifier(Modifier::BOLD);
pub const ATTACHED_STYLE: Style = Style::new().fg(Color::Rgb(142, 192, 124));

pub fn highlight_style(focused: bool) -> Style {
    if focused {
        Style::new()
            .bg(Color::Rgb(27, 37, 51))
            .fg(TEXT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::new().bg(Color::Rgb(22, 28, 36)).fg(MUTED)
    }
}

pub mod icons {
    pub const ACTIVE: &str = "*";
    pub const CURSOR: &str = "> ";
}
