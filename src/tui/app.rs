//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::rc::Rc;
use std::time::Instant;

use crate::config::Settings;
use crate::services::ExpenseController;
use crate::store::TransactionStore;

use super::table_model::TableModel;
use super::widgets::{ErrorInfo, TextInput};

/// How long a status message stays visible, in seconds
const STATUS_TIMEOUT_SECS: u64 = 4;

/// Which part of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedField {
    #[default]
    Amount,
    Category,
    AmountFilter,
    CategoryFilter,
    Table,
}

impl FocusedField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::AmountFilter,
            Self::AmountFilter => Self::CategoryFilter,
            Self::CategoryFilter => Self::Table,
            Self::Table => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Table,
            Self::Category => Self::Amount,
            Self::AmountFilter => Self::Category,
            Self::CategoryFilter => Self::AmountFilter,
            Self::Table => Self::CategoryFilter,
        }
    }

    /// Whether this field takes typed text
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Table)
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Error(ErrorInfo),
}

/// Main application state
pub struct App<'a> {
    /// Input handling over the store
    pub controller: ExpenseController<'a>,

    /// Application settings
    pub settings: &'a Settings,

    /// Rows the table draws; kept current by store notifications
    pub table: Rc<TableModel>,

    /// Whether the app should quit
    pub should_quit: bool,

    pub focus: FocusedField,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    pub amount_input: TextInput,
    pub category_input: TextInput,
    pub amount_filter_input: TextInput,
    pub category_filter_input: TextInput,

    /// Selected table row (if any)
    pub selected_row: Option<usize>,

    /// Status message and when it was set
    pub status_message: Option<(String, Instant)>,
}

impl<'a> App<'a> {
    /// Create a new App over the store, registering the table model with it
    pub fn new(store: &'a mut TransactionStore, settings: &'a Settings) -> Self {
        let table = Rc::new(TableModel::new());
        table.refresh(store);
        store.register(table.clone());

        let controller =
            ExpenseController::new(store).with_category_policy(settings.category_policy());

        let category_hint = if settings.categories.is_empty() {
            "e.g. food".to_string()
        } else {
            settings.categories.join(", ")
        };

        let mut app = Self {
            controller,
            settings,
            table,
            should_quit: false,
            focus: FocusedField::default(),
            active_dialog: ActiveDialog::default(),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 12.50"),
            category_input: TextInput::new().label("Category").placeholder(category_hint),
            amount_filter_input: TextInput::new()
                .label("Amount")
                .placeholder("exact amount"),
            category_filter_input: TextInput::new()
                .label("Category")
                .placeholder("exact category"),
            selected_row: None,
            status_message: None,
        };
        app.sync_focus();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self) {
        if let Some((_, set_at)) = &self.status_message {
            if set_at.elapsed().as_secs() >= STATUS_TIMEOUT_SECS {
                self.status_message = None;
            }
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    pub fn show_error(&mut self, info: ErrorInfo) {
        self.active_dialog = ActiveDialog::Error(info);
    }

    pub fn open_help(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn set_focus(&mut self, focus: FocusedField) {
        self.focus = focus;
        if focus == FocusedField::Table && self.selected_row.is_none() && !self.table.is_empty() {
            self.selected_row = Some(0);
        }
        self.sync_focus();
    }

    /// The text input that currently has focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FocusedField::Amount => Some(&mut self.amount_input),
            FocusedField::Category => Some(&mut self.category_input),
            FocusedField::AmountFilter => Some(&mut self.amount_filter_input),
            FocusedField::CategoryFilter => Some(&mut self.category_filter_input),
            FocusedField::Table => None,
        }
    }

    fn sync_focus(&mut self) {
        self.amount_input.focused = self.focus == FocusedField::Amount;
        self.category_input.focused = self.focus == FocusedField::Category;
        self.amount_filter_input.focused = self.focus == FocusedField::AmountFilter;
        self.category_filter_input.focused = self.focus == FocusedField::CategoryFilter;
    }

    /// Move selection up in the table
    pub fn move_up(&mut self) {
        if let Some(row) = self.selected_row {
            self.selected_row = Some(row.saturating_sub(1));
        } else if !self.table.is_empty() {
            self.selected_row = Some(0);
        }
    }

    /// Move selection down in the table
    pub fn move_down(&mut self) {
        let len = self.table.len();
        if len == 0 {
            return;
        }
        self.selected_row = Some(match self.selected_row {
            Some(row) => (row + 1).min(len - 1),
            None => 0,
        });
    }

    /// Keep the selection inside the table after rows disappear
    pub fn clamp_selection(&mut self) {
        let len = self.table.len();
        self.selected_row = match self.selected_row {
            Some(_) if len == 0 => None,
            Some(row) => Some(row.min(len - 1)),
            None => None,
        };
    }
}
