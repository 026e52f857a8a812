//! Vertical scrolling for forms taller than their area
//!
//! Form items (error block, fields, total line, submit button) have fixed
//! heights. When they do not all fit, a window of whole items is shown that
//! contains the focused item, with `^`/`v` rows marking clipped content.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Rows kept for the scroll indicators while scrolling
const INDICATOR_ROWS: u32 = 2;

/// Items `first..first + count` are on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub first: usize,
    pub count: usize,
}

impl Window {
    /// Pick the items to show so that `focus` is fully visible, keeping as
    /// many items above it as fit
    pub fn around(heights: &[u16], focus: usize, available: u16) -> Self {
        let len = heights.len();
        let total: u32 = heights.iter().map(|h| u32::from(*h)).sum();
        if len == 0 || total <= u32::from(available) {
            return Self {
                first: 0,
                count: len,
            };
        }

        let usable = u32::from(available).saturating_sub(INDICATOR_ROWS);
        let focus = focus.min(len - 1);

        let mut first = focus;
        let mut used = u32::from(heights[focus]);
        while first > 0 && used + u32::from(heights[first - 1]) <= usable {
            first -= 1;
            used += u32::from(heights[first]);
        }

        let mut used = 0;
        let mut count = 0;
        for height in &heights[first..] {
            if used + u32::from(*height) > usable {
                break;
            }
            used += u32::from(*height);
            count += 1;
        }

        Self {
            first,
            count: count.max(1),
        }
    }

    pub fn can_scroll_up(&self) -> bool {
        self.first > 0
    }

    pub fn can_scroll_down(&self, len: usize) -> bool {
        self.first + self.count < len
    }
}

/// Lay out the items around `focus` and draw the scroll indicators.
///
/// Returns one slot per item; items outside the window get `None`.
pub fn layout_scrolled(
    frame: &mut Frame,
    area: Rect,
    heights: &[u16],
    focus: usize,
) -> Vec<Option<Rect>> {
    let window = Window::around(heights, focus, area.height);
    let scrolling = window.count < heights.len();

    let mut constraints = Vec::new();
    if scrolling {
        constraints.push(Constraint::Length(1)); // Up indicator
    }
    constraints.extend(
        heights[window.first..window.first + window.count]
            .iter()
            .map(|h| Constraint::Length(*h)),
    );
    if scrolling {
        constraints.push(Constraint::Length(1)); // Down indicator
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let offset = usize::from(scrolling);
    if window.can_scroll_up() {
        draw_indicator(frame, chunks[0], "^");
    }
    if window.can_scroll_down(heights.len()) {
        draw_indicator(frame, chunks[offset + window.count], "v");
    }

    (0..heights.len())
        .map(|idx| {
            (idx >= window.first && idx < window.first + window.count)
                .then(|| chunks[offset + idx - window.first])
        })
        .collect()
}

fn draw_indicator(frame: &mut Frame, area: Rect, symbol: &str) {
    let indicator = Paragraph::new(symbol)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(indicator, area);
}
