//! # CountryCard Component
//!
//! One country's summary, drawn as a bordered box inside the grid.
//! Every value line is truncated to the card width; the detail overlay
//! shows the same fields wrapped in full.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::countries::Country;
use crate::tui::component::Component;

/// Rows a card needs: 6 field lines + 2 border lines.
pub const CARD_HEIGHT: u16 = 8;

/// (label, value) pairs shown on a card and in the detail overlay.
pub fn field_lines(country: &Country) -> Vec<(&'static str, String)> {
    vec![
        ("Flag", country.flag_image_url().to_string()),
        ("2 Character Code", country.cca2.clone()),
        ("3 Character Code", country.cca3.clone()),
        ("Native Name", country.native_names_dump()),
        ("Alternative Names", country.alt_spellings_joined()),
        ("Country Calling Codes", country.calling_codes_dump()),
    ]
}

pub struct CountryCard<'a> {
    pub country: &'a Country,
    pub selected: bool,
}

impl<'a> CountryCard<'a> {
    pub fn new(country: &'a Country, selected: bool) -> Self {
        Self { country, selected }
    }
}

impl Component for CountryCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;

        let border_style = if self.selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = super::truncate_str(
            self.country.official_name(),
            inner_width.saturating_sub(2),
        );

        let label_style = Style::default().fg(Color::DarkGray);
        let lines: Vec<Line> = field_lines(self.country)
            .into_iter()
            .map(|(label, value)| {
                let prefix = format!("{label}: ");
                let room = inner_width.saturating_sub(prefix.len());
                Line::from(vec![
                    Span::styled(prefix, label_style),
                    Span::raw(super::truncate_str(&value, room)),
                ])
            })
            .collect();

        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(border_style)
            .title_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
