mod browse;
mod components;
mod help;
mod view;

use crate::app::{App, AppMode};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Browse => browse::render_browse_view(f, app),
        AppMode::View => view::render_entry_view(f, app),
        AppMode::Help => help::render_help_view(f),
    }
}
