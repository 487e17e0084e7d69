//! Colors and spacing for the interactive list.

use ratatui::layout::Margin;
use ratatui::style::{Color, Modifier, Style};

/// Styles used when rendering, built once and handed to the app.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Space between the terminal edge and the content
    pub padding: Margin,
    pub title: Style,
    pub status: Style,
    pub value_preview: Style,
    pub error: Style,
    pub spinner: Style,
    pub item_title: Style,
    pub item_description: Style,
    pub last_edited: Style,
    pub highlight: Style,
    pub filter_prompt: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let green = Color::Rgb(0x03, 0x6B, 0x46);
        Self {
            padding: Margin::new(2, 1),
            title: Style::default()
                .fg(Color::Rgb(0xFF, 0xFD, 0xF5))
                .bg(green),
            status: Style::default().fg(green),
            value_preview: Style::default().fg(Color::Rgb(0x04, 0xB5, 0x75)),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            spinner: Style::default().fg(Color::Indexed(205)),
            item_title: Style::default(),
            item_description: Style::default().fg(Color::DarkGray),
            last_edited: Style::default().fg(Color::Rgb(0x9B, 0xA9, 0x2F)),
            highlight: Style::default()
                .fg(Color::Indexed(170))
                .add_modifier(Modifier::BOLD),
            filter_prompt: Style::default().fg(Color::Yellow),
            help: Style::default().fg(Color::DarkGray),
        }
    }
}
