//! Rendering.
//!
//! Layout, top to bottom: title bar, status line, the list, a blank row
//! and the help line. The blank row and the three fixed lines make up
//! [`LIST_CHROME_ROWS`](crate::tui::app::LIST_CHROME_ROWS).

use chrono::Utc;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::constants::APP_TITLE;
use crate::tui::app::{App, State};
use crate::tui::item;
use crate::tui::keymap::Binding;
use crate::tui::status::StatusKind;
use crate::tui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "│ ";

struct Areas {
    title: Rect,
    status: Rect,
    list: Rect,
    help: Rect,
}

fn areas(frame: &Frame, theme: &Theme) -> Areas {
    let [title, status, list, _, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area().inner(theme.padding));

    Areas {
        title,
        status,
        list,
        help,
    }
}

/// Draw the whole screen for the current state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = areas(frame, app.theme());

    frame.render_widget(Paragraph::new(title_line(app)), areas.title);

    match app.state().clone() {
        State::Loading => {
            let line = Line::from(vec![
                Span::styled(app.spinner().frame(), app.theme().spinner),
                Span::raw(" Loading SSM parameters"),
            ]);
            frame.render_widget(Paragraph::new(line), areas.status);
            frame.render_widget(
                Paragraph::new(help_line(&[&app.keys().quit], app.theme())),
                areas.help,
            );
        }
        State::Error(message) => {
            let text = Text::from(vec![
                Line::from(Span::styled("Failed to list parameters", app.theme().error)),
                Line::default(),
                Line::from(message),
            ]);
            // SDK errors carry the whole cause chain; the root cause is last.
            frame.render_widget(
                Paragraph::new(text).wrap(Wrap { trim: false }),
                areas.list,
            );
            frame.render_widget(
                Paragraph::new(help_line(&app.keys().error_help(), app.theme())),
                areas.help,
            );
        }
        State::Ready | State::Filtering => {
            frame.render_widget(Paragraph::new(status_line(app)), areas.status);
            render_list(frame, app, areas.list);

            let help = if *app.state() == State::Filtering {
                help_line(&app.keys().filter_help(), app.theme())
            } else {
                help_line(&app.keys().list_help(), app.theme())
            };
            frame.render_widget(Paragraph::new(help), areas.help);
        }
    }
}

fn title_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled(format!(" {} ", APP_TITLE), app.theme().title)];

    if matches!(app.state(), State::Ready | State::Filtering) {
        let list = app.list();
        let count = if list.is_filtered() {
            format!("  {}/{} parameters", list.visible_len(), list.len())
        } else {
            format!("  {} parameters", list.len())
        };
        spans.push(Span::styled(count, app.theme().help));
    }

    Line::from(spans)
}

fn status_line(app: &App) -> Line<'static> {
    let theme = app.theme();

    if *app.state() == State::Filtering {
        return Line::from(vec![
            Span::styled("Filter: ", theme.filter_prompt),
            Span::raw(app.list().filter().to_string()),
            Span::styled("█", theme.filter_prompt),
        ]);
    }

    match app.status().map(|s| &s.kind) {
        Some(StatusKind::Copied(value)) => Line::from(vec![
            Span::styled("Copied ", theme.status),
            Span::styled(value.clone(), theme.value_preview),
            Span::styled(" to clipboard", theme.status),
        ]),
        Some(StatusKind::Peeking(value)) => Line::from(vec![
            Span::styled("Peeking at ", theme.status),
            Span::styled(value.clone(), theme.value_preview),
        ]),
        Some(StatusKind::Error(message)) => Line::from(Span::styled(message.clone(), theme.error)),
        None if app.list().is_filtered() => Line::from(vec![
            Span::styled("Filter: ", theme.help),
            Span::raw(app.list().filter().to_string()),
        ]),
        None => Line::default(),
    }
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.list().visible_len() == 0 {
        let message = if app.list().is_empty() {
            "No parameters."
        } else {
            "No matches."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, app.theme().help)),
            area,
        );
        return;
    }

    let now = Utc::now();
    let theme = app.theme().clone();
    let items: Vec<ListItem> = app
        .list()
        .visible()
        .map(|param| {
            let (description, edited) = item::subtitle(param, now);
            let mut subtitle = Vec::new();
            if !description.is_empty() {
                subtitle.push(Span::styled(description, theme.item_description));
                subtitle.push(Span::raw(" "));
            }
            if let Some(edited) = edited {
                subtitle.push(Span::styled(edited, theme.last_edited));
            }

            ListItem::new(Text::from(vec![
                Line::from(Span::styled(item::title(param), theme.item_title)),
                Line::from(subtitle),
                Line::default(),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(theme.highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, app.list_mut().state_mut());
}

fn help_line(bindings: &[&Binding], theme: &Theme) -> Line<'static> {
    let text = bindings
        .iter()
        .map(|b| format!("{} {}", b.help_key(), b.help_desc()))
        .collect::<Vec<_>>()
        .join(" • ");
    Line::from(Span::styled(text, theme.help))
}
