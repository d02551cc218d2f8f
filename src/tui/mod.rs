//! Terminal User Interface module
//!
//! A single-screen expense form built on ratatui: inputs for new
//! transactions and filters above a table of everything recorded so far.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod table_model;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use table_model::TableModel;
pub use terminal::run_tui;
