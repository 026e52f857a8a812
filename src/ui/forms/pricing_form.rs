//! Pricing tab rendering

use super::field_renderer::{draw_field_labeled, field_height};
use super::viewport::layout_scrolled;
use super::{draw_fetch_errors, draw_submit_button};
use crate::i18n::Messages;
use crate::state::forms::{Form, FormProps, PricingForm};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the Pricing form with the computed total under the fields
pub fn draw_pricing_form(
    frame: &mut Frame,
    area: Rect,
    form: &PricingForm,
    props: &FormProps,
    messages: &dyn Messages,
) {
    let block = Block::default()
        .title(format!(
            " {} ",
            messages.text("EditListingWizard.tabLabelPricing")
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let errors = fetch_error_messages(props, messages);
    let fields = form.visible_fields();

    let mut heights = vec![errors.len() as u16];
    heights.extend(fields.iter().map(|f| field_height(f)));
    heights.push(2); // total price + spacing
    heights.push(BUTTON_HEIGHT);

    let total_idx = fields.len() + 1;
    let focus = if form.is_submit_active() {
        total_idx + 1
    } else {
        form.active_field() + 1
    };
    let slots = layout_scrolled(
        frame,
        inner.inner(Margin::new(1, 0)),
        &heights,
        focus,
    );

    if let Some(area) = slots[0] {
        draw_fetch_errors(frame, area, &errors);
    }

    let price_label = messages.text(form.mode().price_label());
    for (idx, field) in fields.iter().enumerate() {
        let Some(area) = slots[idx + 1] else {
            continue;
        };
        let label = if field.name == form.price.name {
            price_label.clone()
        } else {
            field.label.resolve(messages)
        };
        draw_field_labeled(
            frame,
            area,
            field,
            &label,
            form.active_field() == idx,
            messages,
        );
    }

    if let Some(area) = slots[total_idx] {
        let total = match form.total_price() {
            Some(total) => Span::styled(
                total.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                messages.text("EditProgramListingPricingForm.totalPriceTooLarge"),
                Style::default().fg(Color::Red),
            ),
        };
        let line = Line::from(vec![
            Span::raw(format!(
                " {}: ",
                messages.text("EditProgramListingPricingForm.totalPrice")
            )),
            total,
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    if let Some(area) = slots[total_idx + 1] {
        draw_submit_button(
            frame,
            area,
            form.submit_state(props),
            props.save_action_msg,
            form.is_submit_active(),
            messages,
        );
    }
}

fn fetch_error_messages(props: &FormProps, messages: &dyn Messages) -> Vec<String> {
    let errors = &props.fetch_errors;
    [
        (
            &errors.update_listing_error,
            "EditProgramListingPricingPanel.updateFailed",
        ),
        (
            &errors.show_listings_error,
            "EditProgramListingPricingPanel.showListingFailed",
        ),
    ]
    .into_iter()
    .filter(|(error, _)| error.is_some())
    .map(|(_, key)| messages.text(key))
    .collect()
}
