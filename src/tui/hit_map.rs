//! # Hit Map
//!
//! Screen regions recorded during the last render pass, used to turn a
//! mouse click at `(column, row)` into something the user meant.
//!
//! The map is cleared at the start of every frame and filled by the
//! components as they draw, so it always matches what is on screen.

use ratatui::layout::{Position, Rect};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A card, by slot on the current page.
    Card(usize),
    /// A numbered page button (1-based).
    Page(usize),
    SortToggle,
    CloseDetail,
    /// Inside the detail overlay but not on its close control.
    DetailBody,
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, area: Rect, hit: Hit) {
        self.regions.push((area, hit));
    }

    /// Most recently recorded region containing the point wins, so overlays
    /// drawn last shadow whatever sits beneath them.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let point = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, hit)| *hit)
    }
}
