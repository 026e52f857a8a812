//! Field rendering utilities for forms

use crate::i18n::Messages;
use crate::state::forms::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TEXT_AREA_HEIGHT: u16 = 6;

/// Rows a field occupies including its border
pub fn field_height(field: &FormField) -> u16 {
    match &field.kind {
        FieldKind::TextArea => TEXT_AREA_HEIGHT,
        FieldKind::Radio(options) | FieldKind::Checkboxes(options) => options.len() as u16 + 2,
        _ => 3,
    }
}

/// Draw a form field with its own label
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    messages: &dyn Messages,
) {
    let label = field.label.resolve(messages);
    draw_field_labeled(frame, area, field, &label, is_active, messages);
}

/// Draw a form field under a caller-supplied label
pub fn draw_field_labeled(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    label: &str,
    is_active: bool,
    messages: &dyn Messages,
) {
    let error = field
        .visible_error()
        .map(|e| messages.format(e.key, &e.params));

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = if field.is_choice() {
        choice_lines(field, is_active, messages)
    } else {
        text_lines(field, is_active, messages)
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn text_lines<'a>(field: &FormField, is_active: bool, messages: &dyn Messages) -> Vec<Line<'a>> {
    let value = field.display_value(messages);
    let cursor = if is_active && !field.is_read_only() {
        "▌"
    } else {
        ""
    };
    let value_style = if field.is_read_only() {
        Style::default().fg(Color::Gray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    if value.is_empty() {
        let hint = match field.placeholder {
            Some(key) => messages.text(key),
            None if is_active && !field.is_read_only() => String::new(),
            None => messages.text("Field.empty"),
        };
        return vec![Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ])];
    }

    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }
    lines
}

fn choice_lines<'a>(field: &FormField, is_active: bool, messages: &dyn Messages) -> Vec<Line<'a>> {
    let radio = matches!(field.kind, FieldKind::Radio(_));
    field
        .options()
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let checked = field.is_checked(&option.value);
            let marker = match (radio, checked) {
                (true, true) => "(•)",
                (true, false) => "( )",
                (false, true) => "[x]",
                (false, false) => "[ ]",
            };
            let highlighted = is_active && idx == field.option_cursor;
            let style = if highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let pointer = if highlighted { ">" } else { " " };
            let label = option.label.resolve(messages);
            Line::from(Span::styled(format!("{pointer} {marker} {label}"), style))
        })
        .collect()
}
