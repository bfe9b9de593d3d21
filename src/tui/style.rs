//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const BADGE: Color = Color::Cyan;
    pub const ACTION: Color = Color::Red;
    pub const ACCENT: Color = Color::Yellow;
    pub const STOPPED: Color = Color::Magenta;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Background-process rows (transparency below the threshold).
    pub fn dimmed() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Stopped-process rows.
    pub fn stopped() -> Style {
        Style::default().fg(Theme::STOPPED)
    }

    /// Thumbnail badge next to the command.
    pub fn badge() -> Style {
        Style::default()
            .fg(Theme::BADGE)
            .add_modifier(Modifier::BOLD)
    }

    /// Kill-button and dropdown accents.
    pub fn action() -> Style {
        Style::default().fg(Theme::ACTION)
    }

    /// Keys in footers and hints.
    pub fn hint_key() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Hint descriptions.
    pub fn hint_text() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }
}
