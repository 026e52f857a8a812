//! Transactions tab with the conditional cancel control

use super::components::{render_button, BUTTON_HEIGHT};
use crate::i18n::Messages;
use crate::state::{CancelButtonMaybe, TransactionPanelState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the transaction list and the cancel control for the selection
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    panel: &TransactionPanelState,
    messages: &dyn Messages,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(BUTTON_HEIGHT + 1), // button + error line
        ])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", messages.text("TransactionPanel.title")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if panel.transactions.is_empty() {
        let text = if panel.loading {
            messages.text("Button.inProgress")
        } else {
            messages.text("TransactionPanel.empty")
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, chunks[0]);
        return;
    }

    let items: Vec<ListItem> = panel
        .transactions
        .iter()
        .map(|tx| {
            let row = messages.format(
                "TransactionPanel.row",
                &[
                    ("listing", tx.listing_title.clone()),
                    ("customer", tx.customer_name.clone()),
                    ("state", messages.text(tx.state.label_key())),
                ],
            );
            ListItem::new(Line::from(row))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(panel.selected_index));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_cancel_button_maybe(frame, chunks[1], &panel.cancel_button(), messages);
}

/// Render the cancel control; nothing at all when `show_button` is false
pub fn render_cancel_button_maybe(
    frame: &mut Frame,
    area: Rect,
    button: &CancelButtonMaybe,
    messages: &dyn Messages,
) {
    if !button.show_button {
        return;
    }

    let label = if button.cancel_in_progress {
        messages.text("Button.inProgress")
    } else {
        messages.text("TransactionPanel.cancelButton")
    };
    let mut button_area = Rect {
        width: (label.chars().count() as u16 + 4).min(area.width),
        height: BUTTON_HEIGHT.min(area.height),
        ..area
    };

    // Failure notice sits above the button
    if button.cancel_error.is_some() && area.height > BUTTON_HEIGHT {
        let error_area = Rect { height: 1, ..area };
        frame.render_widget(
            Paragraph::new(Span::styled(
                messages.text("TransactionPanel.cancelFailed"),
                Style::default().fg(Color::Red),
            )),
            error_area,
        );
        button_area.y += 1;
    }

    render_button(frame, button_area, &label, true, button.is_enabled());
}
