//! TUI Views module
//!
//! The single expense screen: title, entry and filter panels, transaction
//! table, status bar.

pub mod form;
pub mod status_bar;
pub mod table;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Expense Tracker ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("F1 for help", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(title, layout.title);

    form::render_entry(frame, app, layout.entry);
    form::render_filters(frame, app, layout.filters);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        dialogs::render(frame, app);
    }
}
