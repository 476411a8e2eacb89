//! # TitleBar Component
//!
//! Top status bar. Purely presentational: it receives all data as props
//! and has no internal state.
//!
//! The title text changes based on state:
//!
//! 1. **Browsing**: `"Atlas | Loaded 250 countries | 12 matches | page 1/1"`
//! 2. **Loading / failed** (no counts yet): `"Atlas | Fetching countries..."`
//! 3. **Default**: `"Atlas"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Where the user is in the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub match_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Top status bar component.
///
/// # Props
///
/// - `status_message`: Transient status (e.g. "Loaded 250 countries", "Sort: Z→A")
/// - `page_info`: Match count and page position, once data has loaded
pub struct TitleBar {
    pub status_message: String,
    pub page_info: Option<PageInfo>,
}

impl TitleBar {
    pub fn new(status_message: String, page_info: Option<PageInfo>) -> Self {
        Self {
            status_message,
            page_info,
        }
    }

    fn text(&self) -> String {
        let mut text = String::from("Atlas");
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if let Some(info) = self.page_info {
            let noun = if info.match_count == 1 { "match" } else { "matches" };
            text.push_str(&format!(
                " | {} {} | page {}/{}",
                info.match_count,
                noun,
                info.current_page,
                info.total_pages.max(1)
            ));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = super::truncate_str(&self.text(), area.width as usize);
        frame.render_widget(
            Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text() {
        let bar = TitleBar::new(String::new(), None);
        assert_eq!(bar.text(), "Atlas");
    }

    #[test]
    fn test_status_only() {
        let bar = TitleBar::new("Fetching countries...".into(), None);
        assert_eq!(bar.text(), "Atlas | Fetching countries...");
    }

    #[test]
    fn test_with_page_info() {
        let bar = TitleBar::new(
            "Sort: Z→A".into(),
            Some(PageInfo {
                match_count: 1,
                current_page: 1,
                total_pages: 1,
            }),
        );
        assert_eq!(bar.text(), "Atlas | Sort: Z→A | 1 match | page 1/1");
    }

    #[test]
    fn test_empty_result_shows_one_page() {
        let bar = TitleBar::new(
            String::new(),
            Some(PageInfo {
                match_count: 0,
                current_page: 1,
                total_pages: 0,
            }),
        );
        assert_eq!(bar.text(), "Atlas | 0 matches | page 1/1");
    }
}
