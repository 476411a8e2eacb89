//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing status and match counts
//! - `CountryCard`: One country's summary
//! - `StatusPanel`: Loading spinner or fetch error
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: Query input with the sort indicator
//! - `CountryGrid`: Card grid with a selection cursor and row scrolling
//! - `Pagination`: Numbered page buttons
//! - `DetailModal`: Overlay with the full record, scrollable
//!
//! Stateful components use the persistent state + transient wrapper pattern:
//! the `...State` lives in `TuiState`, the wrapper is built each frame with
//! borrowed state and props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── search_bar.rs    (Query input + sort toggle)
//! ├── country_card.rs  (Single card renderer)
//! ├── country_grid.rs  (Card grid container)
//! ├── pagination.rs    (Page buttons)
//! ├── detail_modal.rs  (Detail overlay)
//! └── status_panel.rs  (Loading / error)
//! ```

pub mod country_card;
pub mod country_grid;
pub mod detail_modal;
pub mod pagination;
pub mod search_bar;
pub mod status_panel;
mod title_bar;

pub use country_grid::{CountryGrid, CountryGridState};
pub use detail_modal::{DetailModal, DetailModalState};
pub use pagination::Pagination;
pub use search_bar::{SearchBar, SearchEvent};
pub use status_panel::StatusPanel;
pub use title_bar::{PageInfo, TitleBar};

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
