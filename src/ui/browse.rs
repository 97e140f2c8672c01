use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::ui::components;

pub fn render_browse_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Entry list
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, list, footer] = &chunks[..] {
        render_browse_header(f, app, *header);
        render_entry_list(f, app, *list);
        render_browse_footer(f, app, *footer);
        if let Some(message) = app.status_toast_message() {
            components::render_toast_overlay(f, *header, message);
        }
    }
}

fn render_browse_header(f: &mut Frame, app: &App, area: Rect) {
    let count = app.entries.len();
    let count_text = if count == 0 {
        String::new()
    } else {
        format!(" ({} entries)", count)
    };

    components::render_screen_header(f, area, "Entries", Some(&count_text));
}

fn render_entry_list(f: &mut Frame, app: &App, area: Rect) {
    let mut items = Vec::new();
    let mut selected_item_index: Option<usize> = None;

    if app.entries.is_empty() {
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("No entries yet", Style::default().fg(Color::DarkGray)),
        ])));
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::styled(" to reload from storage", Style::default().fg(Color::DarkGray)),
        ])));
    } else {
        for (i, entry) in app.entries.iter().enumerate() {
            let is_selected = i == app.selected_index;

            // Parse ISO date to more readable format
            let date_display =
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&entry.created_at) {
                    dt.format("%b %d, %H:%M").to_string()
                } else {
                    entry.created_at.clone()
                };

            let (prefix, prefix_style) = if is_selected {
                (
                    " > ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("   ", Style::default())
            };

            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let meta_style = Style::default().fg(Color::DarkGray);
            let max_title_width = area.width.saturating_sub(6) as usize;
            let title = truncate_to_width(&entry.title, max_title_width);

            let title_line = Line::from(vec![
                Span::styled(prefix, prefix_style),
                Span::styled(title, title_style),
            ]);

            let key_display = entry
                .record_key()
                .map_or_else(|| "?".to_string(), |key| key.to_string());
            let meta_line = Line::from(vec![
                Span::styled("   ", meta_style),
                Span::styled(format!("/entries/{}", key_display), meta_style),
                Span::styled(" · ", meta_style),
                Span::styled(format!("no. {}", entry.number), Style::default().fg(Color::Green)),
                Span::styled(" · ", meta_style),
                Span::styled(date_display, meta_style),
            ]);

            items.push(ListItem::new(vec![title_line, meta_line]));
            if is_selected {
                selected_item_index = Some(items.len().saturating_sub(1));
            }
            items.push(ListItem::new(Line::from("")));
        }
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Records ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if let Some(item_index) = selected_item_index {
        list_state.select(Some(item_index));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > max_width.saturating_sub(1) {
            break;
        }
        used += char_width;
        truncated.push(character);
    }
    truncated.push('…');
    truncated
}

fn render_browse_footer(f: &mut Frame, app: &App, area: Rect) {
    let keybindings: &[(&str, &str)] = &[
        ("↑/↓", "select"),
        ("Enter", "open"),
        ("r", "reload"),
        ("?", "help"),
        ("q", "quit"),
    ];

    let status: &[(&str, bool)] = &[("MEMORY", app.use_memory_store)];

    components::render_navigation_footer(f, area, "BROWSE", keybindings, status);
}
