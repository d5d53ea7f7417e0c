use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the TUI
pub struct Colors;

impl Colors {
    pub const ACCENT: Color = Color::Rgb(122, 162, 247);
    pub const SUCCESS: Color = Color::Rgb(158, 206, 106);
    pub const ERROR: Color = Color::Rgb(247, 118, 142);
    pub const WARNING: Color = Color::Rgb(224, 175, 104);

    // UI chrome
    pub const TEXT: Color = Color::Rgb(169, 177, 214);
    pub const INPUT: Color = Color::Rgb(192, 202, 245);
    pub const DIMMED: Color = Color::Rgb(86, 95, 137);
    pub const BORDER: Color = Color::Rgb(65, 72, 104);
    pub const SELECTED_BG: Color = Color::Rgb(36, 40, 59);
}

/// Theme provides pre-built styles
pub struct Theme;

impl Theme {
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Colors::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Colors::DIMMED)
    }

    pub fn faint() -> Style {
        Style::default().fg(Colors::BORDER)
    }

    pub fn border(active: bool) -> Style {
        Style::default().fg(if active { Colors::ACCENT } else { Colors::BORDER })
    }

    pub fn key() -> Style {
        Style::default().fg(Colors::ACCENT)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn success_bold() -> Style {
        Self::success().add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    pub fn error_bold() -> Style {
        Self::error().add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn input(focused: bool) -> Style {
        let style = Style::default().fg(Colors::INPUT);
        if focused {
            style.bg(Colors::SELECTED_BG)
        } else {
            style
        }
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Status line style: anything starting with `Error` is a failure.
    pub fn status(message: &str) -> Style {
        if message.starts_with("Error") {
            Self::error()
        } else {
            Self::success()
        }
    }
}
