//! # Status Panel Component
//!
//! What the main area shows before there is anything to browse: a spinner
//! while the fetch is outstanding, or the failure reason once it has failed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub enum StatusPanel<'a> {
    Loading { spinner_frame: usize },
    Failed { reason: &'a str },
}

impl Component for StatusPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            StatusPanel::Loading { spinner_frame } => {
                let glyph = SPINNER[*spinner_frame % SPINNER.len()];
                let line = Line::from(vec![
                    Span::styled(glyph, Style::default().fg(Color::Cyan)),
                    Span::raw(" Loading..."),
                ]);
                let [_, middle, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(area);
                frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
            }
            StatusPanel::Failed { reason } => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Could not load countries",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(*reason),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press Esc to quit",
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                let block = Block::bordered()
                    .title(" ERROR ")
                    .border_style(Style::default().fg(Color::Red));
                let panel = super::centered_rect(80, 50, area);
                frame.render_widget(
                    Paragraph::new(lines)
                        .block(block)
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true }),
                    panel,
                );
            }
        }
    }
}
