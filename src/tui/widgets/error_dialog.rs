//! Error dialog widget
//!
//! Displays rejected input and other failures with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ExpenseError;

/// An error dialog with details and suggestions
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from an ExpenseError
    pub fn from_error(error: &ExpenseError) -> Self {
        let (title, details, suggestions) = match error {
            ExpenseError::InvalidTransaction(msg) => (
                "Invalid Transaction",
                format!("Invalid amount or category entered: {}", msg),
                vec![
                    "Enter an amount greater than zero, e.g. 12.50",
                    "Enter a non-empty category",
                ],
            ),
            ExpenseError::InvalidFilterCriterion(msg) => (
                "Invalid Filter",
                msg.clone(),
                vec![
                    "Amount filters need a number greater than zero",
                    "Category filters need a non-empty category",
                ],
            ),
            ExpenseError::InvalidArgument(msg) => (
                "Invalid Operation",
                msg.clone(),
                vec!["Re-apply the filter after the table changes"],
            ),
            ExpenseError::Config(msg) => (
                "Configuration Error",
                msg.clone(),
                vec![
                    "Check your settings file for syntax errors",
                    "Run 'expense-tracker init' to write default settings",
                ],
            ),
            ExpenseError::Io(msg) | ExpenseError::Json(msg) => (
                "I/O Error",
                msg.clone(),
                vec!["Check that the config directory is writable"],
            ),
            ExpenseError::Tui(msg) => (
                "Interface Error",
                msg.clone(),
                vec!["Try resizing your terminal window"],
            ),
        };

        Self {
            title: title.to_string(),
            details,
            suggestions: suggestions.into_iter().map(String::from).collect(),
        }
    }

    /// Create a simple error info
    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];

            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(10, 16).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
