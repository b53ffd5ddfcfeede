use ratatui::style::{Color, Modifier, Style};

pub const APP_NAME: &str = "autocomplete-input";

pub const HIGHLIGHT_COLOR: Color = Color::Cyan;
pub const MATCH_COLOR: Color = Color::Yellow;
pub const PLACEHOLDER_COLOR: Color = Color::DarkGray;
pub const LABEL_BG_COLOR: Color = Color::DarkGray;
pub const LABEL_FG_COLOR: Color = Color::White;
pub const FOOTER_BG_COLOR: Color = Color::Rgb(40, 40, 40);
pub const FOOTER_FG_COLOR: Color = Color::Gray;

pub const HIGHLIGHT_STYLE: Style = Style::new()
    .fg(HIGHLIGHT_COLOR)
    .add_modifier(Modifier::BOLD);
pub const PLACEHOLDER_STYLE: Style = Style::new().fg(PLACEHOLDER_COLOR);

/// Dimmed text for inline completions and the overflow marker
pub const DIMMED_STYLE: Style = Style::new()
    .fg(PLACEHOLDER_COLOR)
    .add_modifier(Modifier::DIM);

/// Matched substring in an unselected dropdown row
pub const COMPLETION_MATCH_STYLE: Style = Style::new()
    .fg(MATCH_COLOR)
    .add_modifier(Modifier::BOLD);

/// Matched substring in the selected dropdown row
pub const COMPLETION_SELECTED_MATCH_STYLE: Style = Style::new()
    .fg(MATCH_COLOR)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::UNDERLINED);

/// Style for highlighted label boxes (like command context or app name)
pub const LABEL_STYLE: Style = Style::new()
    .bg(LABEL_BG_COLOR)
    .fg(LABEL_FG_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for the footer bar background
pub const FOOTER_STYLE: Style = Style::new().bg(FOOTER_BG_COLOR).fg(FOOTER_FG_COLOR);

/// Prefix for the selected dropdown row; other rows are indented to match
pub const SELECTED_SYMBOL: &str = "> ";
pub const UNSELECTED_SYMBOL: &str = "  ";
