//! General tab rendering

use super::field_renderer::{draw_field, field_height};
use super::viewport::layout_scrolled;
use super::{draw_fetch_errors, draw_submit_button};
use crate::i18n::Messages;
use crate::state::forms::{Form, FormProps, GeneralForm};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the General form: fetch errors, visible fields, submit button
pub fn draw_general_form(
    frame: &mut Frame,
    area: Rect,
    form: &GeneralForm,
    props: &FormProps,
    messages: &dyn Messages,
) {
    let block = Block::default()
        .title(format!(
            " {} ",
            messages.text("EditListingWizard.tabLabelGeneral")
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let errors = fetch_error_messages(props, messages);
    let fields = form.visible_fields();

    let mut heights = vec![errors.len() as u16];
    heights.extend(fields.iter().map(|f| field_height(f)));
    heights.push(BUTTON_HEIGHT);

    // Item 0 is the error block, so field N is item N + 1
    let focus = form.active_field().min(fields.len()) + 1;
    let slots = layout_scrolled(
        frame,
        inner.inner(Margin::new(1, 0)),
        &heights,
        focus,
    );

    if let Some(area) = slots[0] {
        draw_fetch_errors(frame, area, &errors);
    }

    for (idx, field) in fields.iter().enumerate() {
        if let Some(area) = slots[idx + 1] {
            draw_field(frame, area, field, form.active_field() == idx, messages);
        }
    }

    if let Some(area) = slots[fields.len() + 1] {
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
            &errors.create_listing_draft_error,
            "EditProgramListingGeneralForm.createListingDraftError",
        ),
        (
            &errors.update_listing_error,
            "EditProgramListingGeneralForm.updateFailed",
        ),
        (
            &errors.show_listings_error,
            "EditProgramListingGeneralForm.showListingFailed",
        ),
    ]
    .into_iter()
    .filter(|(error, _)| error.is_some())
    .map(|(_, key)| messages.text(key))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarketplaceConfig;
    use crate::i18n::Catalog;
    use crate::state::forms::{FetchErrors, GeneralValues};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(form: &GeneralForm, props: &FormProps) -> Buffer {
        render_sized(form, props, 80, 40)
    }

    fn render_sized(form: &GeneralForm, props: &FormProps, width: u16, height: u16) -> Buffer {
        let messages = Catalog::english().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw_general_form(frame, frame.area(), form, props, &messages))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_only_update_error_is_shown() {
        let form = GeneralForm::new(&MarketplaceConfig::default());
        let props = FormProps {
            fetch_errors: FetchErrors {
                update_listing_error: Some("disk full".to_string()),
                ..FetchErrors::default()
            },
            ..FormProps::default()
        };
        let screen = text(&render(&form, &props));
        assert!(screen.contains("Failed to update listing. Please try again."));
        assert!(!screen.contains("Failed to create a draft listing"));
        assert!(!screen.contains("Fetching listing data failed."));
    }

    #[test]
    fn test_no_errors_no_error_lines() {
        let form = GeneralForm::new(&MarketplaceConfig::default());
        let screen = text(&render(&form, &FormProps::default()));
        assert!(!screen.contains("Failed"));
        assert!(screen.contains("Program title"));
        assert!(screen.contains("Save changes"));
    }

    #[test]
    fn test_in_progress_label() {
        let form = GeneralForm::new(&MarketplaceConfig::default());
        let props = FormProps {
            update_in_progress: true,
            ..FormProps::default()
        };
        assert!(text(&render(&form, &props)).contains("Working…"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let form = GeneralForm::new(&MarketplaceConfig::default());
        let props = FormProps::default();
        assert_eq!(render(&form, &props), render(&form, &props));
    }

    fn custom_hours_form() -> GeneralForm {
        GeneralForm::from_values(
            &MarketplaceConfig::default(),
            GeneralValues {
                title: "Forest bathing".to_string(),
                description: "Slow walks\nin the woods".to_string(),
                tags: "outdoors".to_string(),
                difficulty: vec!["beginner".to_string()],
                hours: Some("custom".to_string()),
                custom_hours: Some(3.into()),
            },
        )
    }

    #[test]
    fn test_focused_hours_visible_on_small_terminal() {
        let mut form = custom_hours_form();
        form.active_field_index = 4;
        let screen = text(&render_sized(&form, &FormProps::default(), 80, 24));
        assert!(screen.contains("( ) 8"));
        assert!(screen.contains("(•) Custom"));
        assert!(screen.contains("^"));
    }

    #[test]
    fn test_small_terminal_starts_at_top() {
        let form = custom_hours_form();
        let screen = text(&render_sized(&form, &FormProps::default(), 80, 24));
        assert!(screen.contains("Forest bathing"));
        assert!(screen.contains("in the woods"));
        assert!(!screen.contains("(•) Custom"));
        assert!(!screen.contains("Save changes"));
        assert!(!screen.contains("^"));
    }

    #[test]
    fn test_submit_focus_scrolls_to_button() {
        let mut form = custom_hours_form();
        form.active_field_index = form.field_count() - 1;
        let screen = text(&render_sized(&form, &FormProps::default(), 80, 24));
        assert!(screen.contains("Save changes"));
        assert!(screen.contains("Number of hours"));
    }
}
