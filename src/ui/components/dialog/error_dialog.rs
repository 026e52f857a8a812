//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::i18n::Messages;
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, messages: &dyn Messages) {
    let title = messages.text("ErrorDialog.title");
    let hint = messages.text("ErrorDialog.hint");

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            color: Color::Red,
            message: error_message,
            hint: Some(&hint),
            max_width: 60,
        },
    );
}
