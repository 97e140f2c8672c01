// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod ui;

use app::{App, AppMode, Navigable};
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use record_nav::NavConfig;
use std::{io, time::Duration};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Load navigation config, creating the default file on first run
    let nav_config = NavConfig::load()?;

    // Check for command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let use_memory = args.get(1).is_some_and(|flag| flag == "--memory");
    if args.len() > 1 && !use_memory {
        return handle_cli_args(&args);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and open storage
    let mut app = App::new(nav_config);
    app.init_storage(use_memory);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn handle_cli_args(args: &[String]) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| color_eyre::eyre::eyre!("No option provided"))?;
    let program_name = args.first().map_or("record-nav", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" => print_help(program_name),
        "--version" | "-v" => println!("record-nav v{}", env!("CARGO_PKG_VERSION")),
        other => {
            eprintln!("Unknown option: {}", other);
            eprintln!("Run with --help for available options.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("record-nav - previous/next record navigation demo");
    println!();
    println!("Usage: {} [option]", program_name);
    println!();
    println!("Options:");
    println!("  --memory   - Browse a throwaway in-memory copy of the demo data");
    println!("  --help     - Show this help");
    println!("  --version  - Show version");
    println!();
    println!("Run without arguments to browse the records under ./data.");
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.clear_expired_status_toast();

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle KeyPress events to avoid duplicate handling
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_quit = true;
                        continue;
                    }

                    match app.mode {
                        AppMode::Browse => handle_browse_mode(app, key.code)?,
                        AppMode::View => handle_view_mode(app, key.code)?,
                        AppMode::Help => handle_help_mode(app, key.code)?,
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(app, mouse)?;
                }
                Event::Paste(_) | Event::FocusGained | Event::FocusLost | Event::Resize(_, _) => {}
            }
        }
    }

    Ok(())
}

fn handle_browse_mode(app: &mut App, key_code: KeyCode) -> Result<()> {
    match key_code {
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter => app.open_selected_entry()?,
        KeyCode::Char('r') => {
            app.load_entries();
            app.show_status_toast("RELOADED");
        }
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
    Ok(())
}

fn handle_view_mode(app: &mut App, key_code: KeyCode) -> Result<()> {
    match key_code {
        KeyCode::Left | KeyCode::Char('p') => app.activate_previous()?,
        KeyCode::Right | KeyCode::Char('n') => app.activate_next()?,
        KeyCode::Esc | KeyCode::Backspace => app.close_view(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Enter
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
    Ok(())
}

fn handle_help_mode(app: &mut App, key_code: KeyCode) -> Result<()> {
    match key_code {
        KeyCode::Esc => app.close_help(),
        KeyCode::Char('q') => app.close_help(),
        KeyCode::Enter
        | KeyCode::Backspace
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => {}
    }
    Ok(())
}

fn handle_mouse_event(app: &mut App, mouse: event::MouseEvent) -> Result<()> {
    match mouse.kind {
        event::MouseEventKind::ScrollUp => match app.mode {
            AppMode::Browse => app.select_previous(),
            AppMode::View => app.activate_previous()?,
            AppMode::Help => {}
        },
        event::MouseEventKind::ScrollDown => match app.mode {
            AppMode::Browse => app.select_next(),
            AppMode::View => app.activate_next()?,
            AppMode::Help => {}
        },
        event::MouseEventKind::ScrollLeft
        | event::MouseEventKind::ScrollRight
        | event::MouseEventKind::Down(_)
        | event::MouseEventKind::Up(_)
        | event::MouseEventKind::Drag(_)
        | event::MouseEventKind::Moved => {}
    }
    Ok(())
}
