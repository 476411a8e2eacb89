//! # Detail Modal Component
//!
//! Overlay with the full record for the selected country, wrapped to the
//! overlay width and scrollable when the native-name dump runs long.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailModalState` lives in `TuiState`
//! - `DetailModal` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use super::country_card::field_lines;
use crate::countries::Country;
use crate::tui::component::Component;
use crate::tui::hit_map::{Hit, HitMap};

const CLOSE_LABEL: &str = "[x]";

#[derive(Debug, Default)]
pub struct DetailModalState {
    pub scroll: u16,
    /// Recomputed every render from the wrapped line count.
    max_scroll: u16,
}

impl DetailModalState {
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll);
    }
}

/// Every field of the record, one labelled line each.
pub fn detail_lines(country: &Country) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::DarkGray);
    let mut rows = vec![
        ("Country Name", country.official_name().to_string()),
        ("Common Name", country.common_name().to_string()),
    ];
    rows.extend(field_lines(country));

    rows.into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value),
            ])
        })
        .collect()
}

pub struct DetailModal<'a> {
    state: &'a mut DetailModalState,
    country: &'a Country,
    hits: &'a mut HitMap,
}

impl<'a> DetailModal<'a> {
    pub fn new(state: &'a mut DetailModalState, country: &'a Country, hits: &'a mut HitMap) -> Self {
        Self {
            state,
            country,
            hits,
        }
    }
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = super::centered_rect(70, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                format!(" {} ", self.country.common_name()),
                title_style,
            ))
            .title_top(Line::from(CLOSE_LABEL).right_aligned())
            .title_bottom(Line::from(" Esc Close  ↑↓ Scroll ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);
        let body = Paragraph::new(detail_lines(self.country)).wrap(Wrap { trim: false });

        let total_lines = body.line_count(inner.width) as u16;
        self.state.max_scroll = total_lines.saturating_sub(inner.height);
        self.state.scroll = self.state.scroll.min(self.state.max_scroll);

        frame.render_widget(
            body.block(block).scroll((self.state.scroll, 0)),
            overlay,
        );

        self.hits.record(overlay, Hit::DetailBody);
        if overlay.width > CLOSE_LABEL.len() as u16 + 2 {
            let close = Rect::new(
                overlay.right() - 1 - CLOSE_LABEL.len() as u16,
                overlay.y,
                CLOSE_LABEL.len() as u16,
                1,
            );
            self.hits.record(close, Hit::CloseDetail);
        }
    }
}
