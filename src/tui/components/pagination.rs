//! # Pagination Component
//!
//! A row of numbered page buttons with the active page highlighted.
//! When every button doesn't fit on one line, a window of buttons around
//! the active page is shown instead.

use std::ops::RangeInclusive;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::hit_map::{Hit, HitMap};

const GAP: u16 = 1;

fn button_width(page: usize) -> u16 {
    page.to_string().len() as u16 + 2
}

/// Pages whose buttons fit in `width` columns, grown outward from `current`.
pub fn visible_range(current: usize, total: usize, width: u16) -> RangeInclusive<usize> {
    let mut start = current;
    let mut end = current;
    let mut used = button_width(current);

    loop {
        let mut grew = false;
        if end < total && used + GAP + button_width(end + 1) <= width {
            end += 1;
            used += GAP + button_width(end);
            grew = true;
        }
        if start > 1 && used + GAP + button_width(start - 1) <= width {
            start -= 1;
            used += GAP + button_width(start);
            grew = true;
        }
        if !grew {
            break;
        }
    }
    start..=end
}

pub struct Pagination<'a> {
    pub current_page: usize,
    pub total_pages: usize,
    hits: &'a mut HitMap,
}

impl<'a> Pagination<'a> {
    pub fn new(current_page: usize, total_pages: usize, hits: &'a mut HitMap) -> Self {
        Self {
            current_page,
            total_pages,
            hits,
        }
    }
}

impl Component for Pagination<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.total_pages == 0 || area.height == 0 {
            return;
        }

        let range = visible_range(self.current_page, self.total_pages, area.width);
        let mut spans = Vec::new();
        let mut x = area.x;

        for page in range {
            let width = button_width(page);
            let style = if page == self.current_page {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {page} "), style));
            spans.push(Span::raw(" "));
            self.hits
                .record(Rect::new(x, area.y, width, 1), Hit::Page(page));
            x += width + GAP;
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
