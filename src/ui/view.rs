use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Entry, entry_view_url};
use crate::ui::components;

pub fn render_entry_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Entry content
            Constraint::Length(3), // Navigation actions
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, content, actions, footer] = &chunks[..] {
        render_view_header(f, app, *header);
        render_entry_content(f, app, *content);
        render_action_bar(f, app, *actions);
        render_view_footer(f, *footer);
        if let Some(message) = app.status_toast_message() {
            components::render_toast_overlay(f, *header, message);
        }
    }
}

fn render_view_header(f: &mut Frame, app: &App, area: Rect) {
    let route = app
        .current_entry
        .as_ref()
        .map(|entry| format!(" · {}", entry_view_url(entry)));

    components::render_screen_header(f, area, "Entry", route.as_deref());
}

fn render_entry_content(f: &mut Frame, app: &App, area: Rect) {
    let Some(entry) = &app.current_entry else {
        f.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(
                "  Nothing open",
                Style::default().fg(Color::DarkGray),
            )]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            area,
        );
        return;
    };

    let date_display = if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&entry.created_at) {
        dt.format("%b %d, %H:%M").to_string()
    } else {
        entry.created_at.clone()
    };

    let meta_style = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  no. ", meta_style),
            Span::styled(entry.number.to_string(), Style::default().fg(Color::Green)),
            Span::styled(" · ", meta_style),
            Span::styled(date_display, meta_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(entry.body.clone(), Style::default().fg(Color::White)),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", entry_title(entry)))
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        area,
    );
}

fn entry_title(entry: &Entry) -> &str {
    if entry.title.is_empty() {
        "Untitled"
    } else {
        entry.title.as_str()
    }
}

fn render_action_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    if let Some(nav) = &app.navigation {
        spans.extend(components::action_spans(&nav.previous));
        spans.push(Span::raw("    "));
        spans.extend(components::action_spans(&nav.next));
    } else {
        spans.push(Span::styled(
            "Resolving neighbors...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Navigate ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_view_footer(f: &mut Frame, area: Rect) {
    components::render_navigation_footer(
        f,
        area,
        "VIEW",
        &[
            ("←/p", "previous"),
            ("→/n", "next"),
            ("Esc", "back"),
            ("?", "help"),
        ],
        &[],
    );
}
