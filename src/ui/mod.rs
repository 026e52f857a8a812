//! UI module for rendering the TUI
//!
//! Rendering is a pure function of [`App`]; nothing here mutates state.

mod components;
mod forms;
mod layout;
mod transaction_panel;

use crate::app::App;
use crate::i18n::Messages;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (tabs_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app);

    match app.state.current_view {
        View::General => forms::draw_general_form(
            frame,
            main_area,
            &app.state.general_form,
            &app.state.general_props(),
            &app.messages,
        ),
        View::Pricing => {
            let mut area = main_area;
            if app.state.listing.is_none() && !app.state.listing_loading {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(0)])
                    .split(main_area);
                frame.render_widget(
                    Paragraph::new(format!(
                        " {}",
                        app.messages.text("EditListingWizard.pricingRequiresDraft")
                    ))
                    .style(Style::default().fg(Color::Yellow)),
                    chunks[0],
                );
                area = chunks[1];
            }
            forms::draw_pricing_form(
                frame,
                area,
                &app.state.pricing_form,
                &app.state.pricing_props(),
                &app.messages,
            );
        }
        View::Transactions => {
            transaction_panel::draw(frame, main_area, &app.state.transactions, &app.messages)
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog on top of everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, &app.messages);
    }
}
