//! # CountryGrid Component
//!
//! Lays the current page's cards out in as many columns as fit, with a
//! selection cursor. When the page has more rows than the screen, the grid
//! scrolls by whole rows to keep the cursor visible.
//!
//! `columns` is cached from the last render so arrow keys move by the
//! layout the user actually sees.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use super::country_card::{CARD_HEIGHT, CountryCard};
use crate::countries::Country;
use crate::tui::component::Component;
use crate::tui::hit_map::{Hit, HitMap};

pub const MIN_CARD_WIDTH: u16 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Persistent grid state: cursor slot on the page, first visible row, last layout.
#[derive(Debug)]
pub struct CountryGridState {
    pub cursor: usize,
    pub scroll_row: usize,
    pub columns: usize,
    page: usize,
}

impl Default for CountryGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryGridState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            page: 1,
        }
    }

    /// Resets the cursor when the page changes and keeps it inside `len`.
    pub fn sync(&mut self, page: usize, len: usize) {
        if page != self.page {
            self.page = page;
            self.cursor = 0;
            self.scroll_row = 0;
        }
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
    }

    pub fn move_cursor(&mut self, direction: Move, len: usize) {
        if len == 0 {
            return;
        }
        let columns = self.columns.max(1);
        self.cursor = match direction {
            Move::Up if self.cursor >= columns => self.cursor - columns,
            Move::Down if self.cursor + columns < len => self.cursor + columns,
            Move::Left => self.cursor.saturating_sub(1),
            Move::Right => (self.cursor + 1).min(len - 1),
            _ => self.cursor,
        };
    }

    fn ensure_visible(&mut self, visible_rows: usize) {
        let row = self.cursor / self.columns.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

/// Transient render wrapper for the grid.
pub struct CountryGrid<'a> {
    state: &'a mut CountryGridState,
    countries: &'a [&'a Country],
    hits: &'a mut HitMap,
}

impl<'a> CountryGrid<'a> {
    pub fn new(
        state: &'a mut CountryGridState,
        countries: &'a [&'a Country],
        hits: &'a mut HitMap,
    ) -> Self {
        Self {
            state,
            countries,
            hits,
        }
    }
}

impl Component for CountryGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let len = self.countries.len();
        let columns = ((area.width / MIN_CARD_WIDTH) as usize).max(1);
        let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
        let total_rows = len.div_ceil(columns);

        self.state.columns = columns;
        self.state.ensure_visible(visible_rows);

        let needs_scrollbar = total_rows > visible_rows;
        let cards_area = if needs_scrollbar {
            Rect {
                width: area.width.saturating_sub(1),
                ..area
            }
        } else {
            area
        };

        let last_row = total_rows.min(self.state.scroll_row + visible_rows);
        for (offset, row) in (self.state.scroll_row..last_row).enumerate() {
            let y = cards_area.y + offset as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(cards_area.bottom().saturating_sub(y));
            let row_area = Rect::new(cards_area.x, y, cards_area.width, height);
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row_area);

            for (col, cell) in cells.iter().enumerate() {
                let slot = row * columns + col;
                let Some(country) = self.countries.get(slot) else {
                    break;
                };
                CountryCard::new(country, slot == self.state.cursor).render(frame, *cell);
                self.hits.record(*cell, Hit::Card(slot));
            }
        }

        if needs_scrollbar {
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(total_rows.saturating_sub(visible_rows))
                .position(self.state.scroll_row);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }
    }
}
