//! # Derived View
//!
//! Pure functions that turn `App` state into what the screen shows:
//!
//! ```text
//! all_countries ──filter(query)──► matches ──sort(direction)──► sorted ──paginate(page)──► page
//! ```
//!
//! Nothing here is stored. The TUI calls `derive_view()` every frame, and the
//! reducer calls the same pieces when it needs to clamp the page or resolve a
//! click. Each call builds a fresh `Vec` of references into the loaded list;
//! the list itself is never reordered.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::state::{App, SortDirection};
use crate::countries::Country;

pub const ITEMS_PER_PAGE: usize = 25;

pub fn matches(country: &Country, query: &str) -> bool {
    country
        .common_name()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Records whose common name contains `query`, ignoring case. Empty query keeps everything.
pub fn filter<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    countries
        .iter()
        .filter(|country| matches(country, query))
        .collect()
}

/// Collation key for a name: (case-folded with diacritics stripped, case-folded).
///
/// Comparing on the first element puts "Åland Islands" among the A's and
/// "Curaçao" between "Cuba" and "Cyprus"; the second breaks ties so the
/// order stays total.
pub fn collation_key(name: &str) -> (String, String) {
    let folded = name.to_lowercase();
    let base = folded.nfd().filter(|c| !is_combining_mark(*c)).collect();
    (base, folded)
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Returns a new, stably sorted sequence; the input is left untouched.
pub fn sort<'a>(countries: &[&'a Country], direction: SortDirection) -> Vec<&'a Country> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_names(a.common_name(), b.common_name());
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

pub fn total_pages(match_count: usize) -> usize {
    match_count.div_ceil(ITEMS_PER_PAGE)
}

/// Clamps a 1-based page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The window `[(page-1)*25, page*25)` of `sorted`, clipped to its length.
pub fn paginate<T>(sorted: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE);
    if start >= sorted.len() {
        return &[];
    }
    let end = (start + ITEMS_PER_PAGE).min(sorted.len());
    &sorted[start..end]
}

/// Filtered and sorted matches for the current query and direction.
pub fn sorted_matches(app: &App) -> Vec<&Country> {
    sort(
        &filter(app.all_countries(), &app.search_query),
        app.sort_direction,
    )
}

/// Everything the loaded screen needs, borrowed from `App`.
#[derive(Debug)]
pub struct View<'a> {
    pub page_items: Vec<&'a Country>,
    pub match_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub sort_direction: SortDirection,
    pub query: &'a str,
    pub selected: Option<&'a Country>,
}

pub fn derive_view(app: &App) -> View<'_> {
    let sorted = sorted_matches(app);
    let total_pages = total_pages(sorted.len());
    let current_page = clamp_page(app.current_page, total_pages);
    View {
        page_items: paginate(&sorted, current_page).to_vec(),
        match_count: sorted.len(),
        total_pages,
        current_page,
        sort_direction: app.sort_direction,
        query: &app.search_query,
        selected: app.selected(),
    }
}
