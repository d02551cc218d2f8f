//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::Settings;
use crate::store::TransactionStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the expense form until the user quits
pub fn run_tui(store: &mut TransactionStore, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_app(&mut terminal, store, settings);

    // Restore even when the loop failed, then report the loop's error first
    let restored = restore_terminal();
    result?;
    restored
}

fn run_app(terminal: &mut Tui, store: &mut TransactionStore, settings: &Settings) -> Result<()> {
    let mut app = App::new(store, settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(10)));

    tracing::info!("Expense form started");

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        handle_event(&mut app, events.next()?)?;

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        transactions = app.controller.store().len(),
        "Expense form closed"
    );
    Ok(())
}
