//! Event handler for the TUI
//!
//! Routes keyboard events to the dialog, the focused input or the table.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::filter::{AmountFilter, CategoryFilter, TransactionFilter};

use super::app::{App, FocusedField};
use super::event::Event;
use super::widgets::ErrorInfo;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Failed(msg) => Err(anyhow::anyhow!("terminal input failed: {}", msg)),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    if handle_global_key(app, key)? {
        return Ok(());
    }

    if app.focus.is_text() {
        handle_input_key(app, key)
    } else {
        handle_table_key(app, key)
    }
}

/// Keys that work regardless of focus. Returns true when the key was used.
fn handle_global_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('r') if ctrl => {
            app.controller.clear_filter()?;
            app.set_status("Filter cleared");
        }
        KeyCode::Char('u') if ctrl => undo_selected(app),
        KeyCode::F(1) => app.open_help(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Handle keys while one of the text inputs has focus
fn handle_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => submit(app)?,
        KeyCode::Esc => {
            if let Some(input) = app.focused_input() {
                input.clear();
            }
        }
        _ => {
            if let Some(input) = app.focused_input() {
                match key.code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Handle keys while the table has focus
fn handle_table_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => {
            if !app.table.is_empty() {
                app.selected_row = Some(0);
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.table.len();
            if len > 0 {
                app.selected_row = Some(len - 1);
            }
        }
        KeyCode::Char('u') | KeyCode::Delete => undo_selected(app),
        KeyCode::Esc => app.selected_row = None,
        _ => {}
    }
    Ok(())
}

/// Enter on a text input: add a transaction or apply a filter
fn submit(app: &mut App) -> Result<()> {
    match app.focus {
        FocusedField::Amount | FocusedField::Category => submit_transaction(app),
        FocusedField::AmountFilter => {
            let filter = AmountFilter::parse(app.amount_filter_input.value());
            apply_filter(app, filter.map(|f| Box::new(f) as Box<dyn TransactionFilter>))?;
        }
        FocusedField::CategoryFilter => {
            let filter = CategoryFilter::new(app.category_filter_input.value());
            apply_filter(app, filter.map(|f| Box::new(f) as Box<dyn TransactionFilter>))?;
        }
        FocusedField::Table => {}
    }
    Ok(())
}

fn submit_transaction(app: &mut App) {
    let amount = app.amount_input.value().to_string();
    let category = app.category_input.value().to_string();

    match app.controller.try_add_transaction(&amount, &category) {
        Ok(transaction) => {
            app.amount_input.clear();
            app.category_input.clear();
            app.set_focus(FocusedField::Amount);
            app.set_status(format!(
                "Added {} {}",
                transaction.amount(),
                transaction.category()
            ));
        }
        Err(e) => app.show_error(ErrorInfo::from_error(&e)),
    }
    app.clamp_selection();
}

fn apply_filter(
    app: &mut App,
    filter: crate::error::ExpenseResult<Box<dyn TransactionFilter>>,
) -> Result<()> {
    let filter = match filter {
        Ok(filter) => filter,
        Err(e) => {
            app.show_error(ErrorInfo::from_error(&e));
            return Ok(());
        }
    };

    let description = filter.to_string();
    app.controller.set_filter(filter);
    match app.controller.apply_filter() {
        Ok(count) => app.set_status(format!("{} matching {}", count, description)),
        Err(e) => app.show_error(ErrorInfo::from_error(&e)),
    }
    Ok(())
}

fn undo_selected(app: &mut App) {
    let row = if app.focus == FocusedField::Table {
        app.selected_row
    } else {
        None
    };

    if app.controller.undo_transaction(row) {
        app.set_status("Transaction undone");
        app.clamp_selection();
    } else {
        app.show_error(
            ErrorInfo::simple("Nothing To Undo", "Please select a transaction to undo")
                .with_suggestion("Tab to the table and choose a row with j/k"),
        );
    }
}
