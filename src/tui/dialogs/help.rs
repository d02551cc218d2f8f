//! Help dialog
//!
//! Lists the key bindings, with the section for the focused area first

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FocusedField};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.focus))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the focused area
pub fn help_lines(focus: FocusedField) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if focus == FocusedField::Table {
        lines.extend(table_section());
        lines.extend(form_section());
    } else {
        lines.extend(form_section());
        lines.extend(table_section());
    }

    lines.push(heading("Global Keys"));
    lines.push(key_line("Tab", "Next field"));
    lines.push(key_line("Shift+Tab", "Previous field"));
    lines.push(key_line("Ctrl+r", "Clear the filter"));
    lines.push(key_line("Ctrl+u", "Undo the selected transaction"));
    lines.push(key_line("F1", "Show/hide help"));
    lines.push(key_line("Ctrl+c", "Quit application"));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn form_section() -> Vec<Line<'static>> {
    vec![
        heading("Form"),
        key_line("Enter", "Add transaction (amount/category)"),
        key_line("Enter", "Apply filter (filter fields)"),
        key_line("Left/Right", "Move cursor"),
        key_line("Home/End", "Jump to start/end"),
        Line::from(""),
    ]
}

fn table_section() -> Vec<Line<'static>> {
    vec![
        heading("Transaction Table"),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Go to top/bottom"),
        key_line("u/Delete", "Undo selected transaction"),
        key_line("Esc", "Clear selection"),
        key_line("?", "Show help"),
        key_line("q", "Quit application"),
        Line::from(""),
    ]
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_heading(focus: FocusedField) -> String {
        help_lines(focus)[0]
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_focused_section_comes_first() {
        assert_eq!(first_heading(FocusedField::Table), "Transaction Table");
        assert_eq!(first_heading(FocusedField::Amount), "Form");
    }
}
