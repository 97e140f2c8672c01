use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::components;

pub fn render_help_view(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        components::render_screen_header(f, *header, "Help", None);
        render_help_body(f, *body);
        render_help_footer(f, *footer);
    }
}

fn shortcut(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Yellow)),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

fn render_help_body(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Browse screen",
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(""),
        shortcut("↑/↓", "Move the selection"),
        shortcut("Home/End", "Jump to first/last entry"),
        shortcut("Enter", "Open the selected entry"),
        shortcut("r", "Reload the list from storage"),
        shortcut("q", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Entry screen",
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(""),
        shortcut("← or p", "Go to the previous record"),
        shortcut("→ or n", "Go to the next record"),
        shortcut("Esc", "Back to the list"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Anywhere",
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(""),
        shortcut("Ctrl+C", "Quit"),
        shortcut("?", "This screen"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  A dimmed arrow means there is no record in that direction.",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shortcuts ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_help_footer(f: &mut Frame, area: Rect) {
    components::render_navigation_footer(f, area, "HELP", &[("Esc", "back")], &[]);
}
