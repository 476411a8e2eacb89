//! # Application State
//!
//! Core business state for Atlas. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── load_state: LoadState            // Loading | Loaded(countries) | Failed(reason)
//! ├── search_query: String             // bound to the search bar
//! ├── sort_direction: SortDirection    // A→Z or Z→A by common name
//! ├── current_page: usize              // 1-based, clamped to [1, max(1, total_pages)]
//! ├── selected_country: Option<usize>  // index into the loaded list, drives the overlay
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::countries::Country;

/// Result of the one startup fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Country>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "A→Z",
            SortDirection::Descending => "Z→A",
        }
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub load_state: LoadState,
    pub search_query: String,
    pub sort_direction: SortDirection,
    pub current_page: usize,
    pub selected_country: Option<usize>,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Loading,
            search_query: String::new(),
            sort_direction: SortDirection::default(),
            current_page: 1,
            selected_country: None,
            status_message: String::from("Fetching countries..."),
        }
    }

    /// The loaded list, or an empty slice while loading or after a failure.
    pub fn all_countries(&self) -> &[Country] {
        match &self.load_state {
            LoadState::Loaded(countries) => countries,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&Country> {
        self.selected_country
            .and_then(|idx| self.all_countries().get(idx))
    }
}
