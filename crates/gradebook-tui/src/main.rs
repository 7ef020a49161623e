//! Gradebook TUI
//!
//! Terminal form application for managing a small student roster, persisted
//! to a semicolon-delimited text file.
//!
//! ## Layout
//!
//! - Top: form (Name, Email, GPA)
//! - Middle: student table, sortable for display only
//! - Bottom: key hints
//!
//! ## Keys
//!
//! - Tab/Shift-Tab: Cycle focus between form fields and the table
//! - ↑/↓: Previous/next field (form) or move selection (table)
//! - Enter: Add (nothing selected) / Update (row selected)
//! - Delete or Ctrl-D: Delete selected (with confirmation)
//! - Esc or Ctrl-L: Clear form and drop selection
//! - q (table) / Ctrl-C: Quit, saving the roster

mod app;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use tracing::error;
use tracing_subscriber::EnvFilter;

use app::{App, Modal};
use gradebook_core::{storage, Config, Roster};

fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config);

    // Load the roster before touching the terminal; load problems become
    // modals once the UI is up
    let mut app = App::new();
    let mut roster = match storage::load(&config.data_file) {
        Ok(outcome) => {
            if outcome.skipped > 0 {
                app.set_warning(format!(
                    "Skipped {} malformed line(s) in {}.",
                    outcome.skipped,
                    config.data_file.display()
                ));
            }
            outcome.roster
        }
        Err(e) => {
            // Start empty for this session; the file is left alone
            error!(error = %e, "load failed");
            app.set_error(e.to_string());
            Roster::new()
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, &mut app, &mut roster, &config);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    roster: &mut Roster,
    config: &Config,
) -> Result<()> {
    let mut saved = false;

    loop {
        // Save only once any pending modal is resolved, so a confirmed
        // delete answered after the quit request still lands in the file.
        // Exit once the save has run and any final modal is dismissed.
        if app.should_quit && app.modal.is_none() {
            if !saved {
                saved = true;
                if let Err(e) = storage::save(&config.data_file, roster) {
                    // Data for this session is lost, but exit cleanly
                    error!(error = %e, "save failed");
                    app.set_error(e.to_string());
                }
            }
            if app.modal.is_none() {
                return Ok(());
            }
        }

        terminal.draw(|frame| ui::draw(frame, app, roster))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, roster, key.code, key.modifiers);
            }
        }
    }
}

fn handle_key(app: &mut App, roster: &mut Roster, code: KeyCode, modifiers: KeyModifiers) {
    // Quit works everywhere, even with a modal up; a pending delete
    // confirmation is cancelled rather than left answerable after quit
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.dismiss_modal();
        app.should_quit = true;
        return;
    }

    // A modal blocks everything until dismissed
    if let Some(modal) = &app.modal {
        match modal {
            Modal::ConfirmDelete { .. } => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(roster),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.dismiss_modal(),
                _ => {}
            },
            Modal::Feedback { .. } => app.dismiss_modal(),
        }
        return;
    }

    match code {
        // Focus movement
        KeyCode::Tab => app.focus_next(roster),
        KeyCode::BackTab => app.focus_prev(roster),
        KeyCode::Up if app.focus.in_form() => app.focus_prev(roster),
        KeyCode::Down if app.focus.in_form() => app.focus_next(roster),
        KeyCode::Up => app.table_up(roster),
        KeyCode::Down => app.table_down(roster),

        // Actions
        KeyCode::Enter => app.submit(roster),
        KeyCode::F(2) => app.update(roster),
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.update(roster),
        KeyCode::Delete => app.request_delete(),
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => app.request_delete(),
        KeyCode::Esc => app.clear_form(),
        KeyCode::Char('l') if modifiers.contains(KeyModifiers::CONTROL) => app.clear_form(),

        // Table-only keys
        KeyCode::Char('q') if !app.focus.in_form() => app.should_quit = true,
        KeyCode::Char('s') if !app.focus.in_form() => app.cycle_sort_column(roster),
        KeyCode::Char('S') if !app.focus.in_form() => app.toggle_sort_direction(roster),

        // Form editing
        KeyCode::Char(c)
            if app.focus.in_form() && !modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.input_char(c)
        }
        KeyCode::Backspace => app.input_backspace(),

        _ => {}
    }
}

/// Initialize file-based logging, only if GRADEBOOK_LOG is set
///
/// Logging to stderr would corrupt the alternate screen, so logs go to a
/// file next to the data file.
fn init_logging(config: &Config) {
    let Ok(log_level) = std::env::var("GRADEBOOK_LOG") else {
        return;
    };

    let log_path = config.data_file.with_extension("log");
    let log_file = match std::fs::File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "gradebook_core={},gradebook_tui={}",
        log_level, log_level
    ));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();
}
