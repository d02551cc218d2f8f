//! Entry and filter panels

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::{App, FocusedField};
use crate::tui::layout::input_rows;
use crate::tui::widgets::TextInput;

/// Render the new transaction inputs
pub fn render_entry(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, FocusedField::Amount | FocusedField::Category);
    render_panel(
        frame,
        area,
        " New Transaction ",
        focused,
        [&app.amount_input, &app.category_input],
    );
}

/// Render the filter inputs
pub fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(
        app.focus,
        FocusedField::AmountFilter | FocusedField::CategoryFilter
    );
    render_panel(
        frame,
        area,
        " Filter ",
        focused,
        [&app.amount_filter_input, &app.category_filter_input],
    );
}

fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    focused: bool,
    inputs: [&TextInput; 2],
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (input, row) in inputs.into_iter().zip(input_rows(inner, 2)) {
        frame.render_widget(input.clone(), row);
    }
}
