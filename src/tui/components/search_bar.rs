//! # SearchBar Component
//!
//! Captures the search query and shows the current sort direction.
//!
//! The buffer is internal state; every edit emits `SearchEvent::Changed`
//! with the full new text, which the parent turns into
//! `Action::QueryChanged`. The sort indicator on the right is a click
//! target for toggling sort.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::SortDirection;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::hit_map::{Hit, HitMap};

const PLACEHOLDER: &str = "Search by country name";
const SORT_WIDTH: u16 = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Changed(String),
}

#[derive(Debug, Default)]
pub struct SearchBar {
    buffer: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) -> Option<SearchEvent> {
        if self.buffer.is_empty() {
            return None;
        }
        self.buffer.clear();
        Some(SearchEvent::Changed(String::new()))
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        sort_direction: SortDirection,
        focused: bool,
        hits: &mut HitMap,
    ) {
        let [input_area, sort_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SORT_WIDTH)]).areas(area);

        let input = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(self.text())
        };
        frame.render_widget(input.block(Block::bordered().title(" Search ")), input_area);

        let sort = Paragraph::new(Line::from(vec![
            Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("Sort {}", sort_direction.label()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]))
        .centered()
        .block(Block::bordered());
        frame.render_widget(sort, sort_area);
        hits.record(sort_area, Hit::SortToggle);

        if !focused {
            return;
        }

        // Cursor sits after the text, clamped inside the border
        let max_x = input_area.x + input_area.width.saturating_sub(2);
        let cursor_x = (input_area.x + 1 + self.text().width() as u16).min(max_x);
        frame.set_cursor_position(Position::new(cursor_x, input_area.y + 1));
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                let clean: String = text.chars().filter(|c| !c.is_control()).collect();
                if clean.is_empty() {
                    return None;
                }
                self.buffer.push_str(&clean);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            _ => None,
        }
    }
}
