//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: title, entry and filter panels,
//! transaction table, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line at the top
    pub title: Rect,
    /// New transaction inputs
    pub entry: Rect,
    /// Filter inputs
    pub filters: Rect,
    /// Transaction table
    pub table: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Entry and filter panels
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            title: vertical[0],
            entry: panels[0],
            filters: panels[1],
            table: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Split a bordered panel's inner area into one line per input
pub fn input_rows(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Length(1); count];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a centered rect using percentage of the available area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.entry.height, 4);
        assert_eq!(layout.entry.width + layout.filters.width, 100);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.table.height, 24);
    }

    #[test]
    fn test_input_rows() {
        let rows = input_rows(Rect::new(0, 0, 20, 2), 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].y, 1);
    }
}
