//! Form rendering module
//!
//! - `field_renderer`: single field rendering
//! - `general_form`: General tab
//! - `pricing_form`: Pricing tab with the total price line
//! - `viewport`: keeps the focused item on screen in short terminals

mod field_renderer;
mod general_form;
mod pricing_form;
mod viewport;

pub use general_form::draw_general_form;
pub use pricing_form::draw_pricing_form;

use crate::i18n::Messages;
use crate::state::forms::SubmitState;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw data layer failures as red lines above the fields
fn draw_fetch_errors(frame: &mut Frame, area: Rect, errors: &[String]) {
    let lines: Vec<Line> = errors.iter().map(|e| Line::from(e.as_str())).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Submit control: label swaps while in progress, gains a mark when ready
fn draw_submit_button(
    frame: &mut Frame,
    area: Rect,
    submit: SubmitState,
    label_key: &str,
    is_active: bool,
    messages: &dyn Messages,
) {
    let mut label = if submit.in_progress {
        messages.text("Button.inProgress")
    } else {
        messages.text(label_key)
    };
    if submit.ready && !submit.in_progress {
        label.push(' ');
        label.push_str(&messages.text("Button.ready"));
    }

    let width = (label.chars().count() as u16 + 4).min(area.width);
    let button_area = Rect {
        width,
        height: BUTTON_HEIGHT.min(area.height),
        ..area
    };
    render_button(frame, button_area, &label, is_active, !submit.disabled);
}
