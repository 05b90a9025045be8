use ratatui::style::{Color, Modifier, Style};

pub mod root {
    use super::*;

    pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const FIELD_NAME_STYLE: Style = Style::new().fg(Color::Gray);
    pub const FIELD_VALUE_STYLE: Style = Style::new()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    pub const PLACEHOLDER_STYLE: Style = Style::new()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
}

pub mod wave_viewer {
    use super::*;

    pub const CURVE_COLOR: Color = Color::LightGreen;
    pub const AXIS_COLOR: Color = Color::DarkGray;
}

pub mod log_view {
    use super::*;

    pub const NORMAL_OUTPUT_STYLE: Style = Style::new().fg(Color::Green);
    pub const ERROR_OUTPUT_STYLE: Style = Style::new().fg(Color::Red);
}

pub mod command_line {
    use super::*;

    pub const LINE_STYLE: Style = Style::new().bg(Color::Blue).fg(Color::Reset);
    pub const HEADER_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
    pub const TEXT_CURSOR_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);
    pub const IDLE_STYLE: Style = Style::new().bg(Color::DarkGray);
}

pub mod command_keys_help_bar {
    use super::*;

    pub const KEY_ID_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
    pub const DESCRIPTION_STYLE: Style =
        Style::new().fg(Color::Green).add_modifier(Modifier::ITALIC);
}
