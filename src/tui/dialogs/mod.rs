//! Modal dialogs drawn over the main form

pub mod help;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::widgets::{error_dialog_area, ErrorDialog};

/// Render the active dialog, if any
pub fn render(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => help::render(frame, app),
        ActiveDialog::Error(info) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(ErrorDialog::new(info), area);
        }
        ActiveDialog::None => {}
    }
}
