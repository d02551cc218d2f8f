//! Transaction table view
//!
//! Draws the rows cached by the table model. Rows matched by the last applied
//! filter are highlighted; the last line carries the total.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedField};

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == FocusedField::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Transactions ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let rows = app.table.rows();
    if rows.is_empty() {
        let text = Paragraph::new("No transactions. Enter an amount and category above.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(6),  // Serial
        Constraint::Length(14), // Amount
        Constraint::Min(15),    // Category
        Constraint::Length(17), // Date
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Date").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let mut table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let style = if row.highlighted {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.serial.to_string()),
                Cell::from(row.amount.clone()),
                Cell::from(row.category.clone()),
                Cell::from(row.date.clone()),
            ])
            .style(style)
        })
        .collect();

    table_rows.push(
        Row::new(vec![
            Cell::from("Total"),
            Cell::from(app.table.total().to_string()),
            Cell::from(""),
            Cell::from(""),
        ])
        .style(bold.fg(Color::Cyan)),
    );

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(app.selected_row);
    }

    frame.render_stateful_widget(table, area, &mut state);
}
