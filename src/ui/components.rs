use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use record_nav::{Emphasis, NavAction};

const SEPARATOR: &str = "  ";

/// Renders the top banner with the app name and screen title
pub fn render_screen_header(f: &mut Frame, area: Rect, screen: &str, detail: Option<&str>) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            "Record Nav",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().fg(Color::DarkGray)),
        Span::styled(screen.to_string(), Style::default().fg(Color::Cyan)),
    ];
    if let Some(detail) = detail {
        spans.push(Span::styled(
            detail.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Left),
        area,
    );
}

/// Terminal glyph for an action's icon name
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "chevron-left" => "❮",
        "chevron-right" => "❯",
        _ => "·",
    }
}

/// Builds the spans for one navigation action button
///
/// The emphasis picks the chip color, the disabled flag dims the whole
/// control, and a hidden label leaves just the icon chip with the
/// tooltip alongside in place of a label.
pub fn action_spans(action: &NavAction) -> Vec<Span<'static>> {
    let glyph = icon_glyph(action.icon);
    let face = if action.outlined {
        format!("[ {} ]", glyph)
    } else {
        format!("  {}  ", glyph)
    };

    let chip_style = if action.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        match action.emphasis {
            Emphasis::Primary => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Emphasis::Muted => Style::default().fg(Color::Black).bg(Color::DarkGray),
        }
    };

    let text_style = if action.disabled || action.label_hidden {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    vec![
        Span::styled(face, chip_style),
        Span::styled(format!(" {}", action.tooltip), text_style),
    ]
}

/// Renders a footer with mode indicator, keybindings, and status
pub fn render_navigation_footer(
    f: &mut Frame,
    area: Rect,
    mode: &str,
    keybindings: &[(&str, &str)],
    status: &[(&str, bool)],
) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    for &(label, active) in status {
        spans.push(Span::raw(SEPARATOR));
        if active {
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, area);
}

/// Overlays the status toast on the right edge of a bordered area
pub fn render_toast_overlay(f: &mut Frame, area: Rect, message: &str) {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: 1,
    };
    if inner.width > 0 && area.height > 2 {
        render_status_toast(f, inner, message);
    }
}
