//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User types into the search bar? That's `Action::QueryChanged(text)`.
//! The fetch settles? That's `Action::CountriesLoaded(list)` or `Action::FetchFailed(reason)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` for the adapter to carry out.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), expected)`.

use log::{debug, info, warn};

use crate::core::state::{App, LoadState};
use crate::core::view::{self, clamp_page, paginate, sorted_matches, total_pages};
use crate::countries::Country;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The startup fetch succeeded.
    CountriesLoaded(Vec<Country>),
    /// The startup fetch failed; carries a human-readable reason.
    FetchFailed(String),
    QueryChanged(String),
    ToggleSort,
    /// Jump to a 1-based page. Out-of-range pages are ignored.
    GoToPage(usize),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Open the detail overlay for the record in this slot of the current page.
    OpenDetail(usize),
    CloseDetail,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CountriesLoaded(countries) => {
            if !app.is_loading() {
                warn!("Ignoring late CountriesLoaded: fetch already settled");
                return Effect::None;
            }
            info!("Loaded {} countries", countries.len());
            app.status_message = format!("Loaded {} countries", countries.len());
            app.load_state = LoadState::Loaded(countries);
            clamp_current_page(app);
        }
        Action::FetchFailed(reason) => {
            if !app.is_loading() {
                warn!("Ignoring late FetchFailed: fetch already settled");
                return Effect::None;
            }
            warn!("Fetch failed: {}", reason);
            app.status_message = String::from("Fetch failed");
            app.load_state = LoadState::Failed(reason);
        }
        Action::QueryChanged(query) => {
            debug!("Query changed: {:?}", query);
            app.search_query = query;
            clamp_current_page(app);
            let still_matches = app
                .selected()
                .is_some_and(|country| view::matches(country, &app.search_query));
            if !still_matches {
                app.selected_country = None;
            }
        }
        Action::ToggleSort => {
            app.sort_direction = app.sort_direction.toggled();
            app.status_message = format!("Sort: {}", app.sort_direction.label());
        }
        Action::GoToPage(page) => {
            let pages = total_pages(sorted_matches(app).len());
            if page == 0 || page > pages {
                debug!("Ignoring GoToPage({}) with {} pages", page, pages);
            } else {
                app.current_page = page;
            }
        }
        Action::NextPage => {
            let pages = total_pages(sorted_matches(app).len());
            app.current_page = clamp_page(app.current_page + 1, pages);
        }
        Action::PrevPage => {
            let pages = total_pages(sorted_matches(app).len());
            app.current_page = clamp_page(app.current_page.saturating_sub(1), pages);
        }
        Action::FirstPage => {
            app.current_page = 1;
        }
        Action::LastPage => {
            let pages = total_pages(sorted_matches(app).len());
            app.current_page = clamp_page(pages, pages);
        }
        Action::OpenDetail(slot) => {
            app.selected_country = resolve_slot(app, slot);
            if let Some(country) = app.selected() {
                debug!("Opened detail for {}", country.cca3);
            }
        }
        Action::CloseDetail => {
            app.selected_country = None;
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

fn clamp_current_page(app: &mut App) {
    let pages = total_pages(sorted_matches(app).len());
    app.current_page = clamp_page(app.current_page, pages);
}

/// Maps a slot on the current page back to an index into the loaded list.
fn resolve_slot(app: &App, slot: usize) -> Option<usize> {
    let sorted = sorted_matches(app);
    let target = *paginate(&sorted, app.current_page).get(slot)?;
    app.all_countries()
        .iter()
        .position(|country| std::ptr::eq(country, target))
}
