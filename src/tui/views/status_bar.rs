//! Status bar view
//!
//! Shows the transaction count, total, active filter and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedField};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(
        format!(" {} txns", app.table.len()),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("Total: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        app.table.total().to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(filter) = app.controller.filter() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} ({} matched)", filter, app.table.matched_count()),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(message) = app.status() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = if app.focus == FocusedField::Table {
        " j/k:Move  u:Undo  q:Quit  ?:Help "
    } else {
        " Enter:Submit  Tab:Next  ^R:Clear filter  F1:Help "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}
