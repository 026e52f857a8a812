//! Layout components (tab header, status bar)

use crate::app::App;
use crate::i18n::Messages;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Split the screen into tab header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab header with the listing state badge
pub fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| {
            Line::from(format!(
                "F{} {}",
                idx + 1,
                app.messages.text(view.label_key())
            ))
        })
        .collect();
    let selected = View::ALL
        .iter()
        .position(|v| *v == app.state.current_view)
        .unwrap_or(0);

    let badge = match &app.state.listing {
        Some(listing) if listing.is_published() => Span::styled(
            format!(" {} ", app.messages.text("EditListingWizard.publishedBadge")),
            Style::default().fg(Color::Green),
        ),
        Some(_) => Span::styled(
            format!(" {} ", app.messages.text("EditListingWizard.draftBadge")),
            Style::default().fg(Color::Yellow),
        ),
        None => Span::raw(""),
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Line::from(badge).right_aligned()),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Draw the status bar: last status message, otherwise key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let content = match &app.state.status_message {
        Some(msg) => Span::styled(format!(" {msg}"), Style::default().fg(Color::Green)),
        None => Span::styled(
            format!(
                " {}",
                app.messages.format(
                    "StatusBar.help",
                    &[("save", crate::platform::SAVE_SHORTCUT.to_string())]
                )
            ),
            Style::default().fg(Color::Gray),
        ),
    };
    let status = Paragraph::new(Line::from(content)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
