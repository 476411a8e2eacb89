//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results
//!   or terminal resize.
//!
//! ## Fetch Lifetime
//!
//! The one network fetch runs as a tokio task that reports back over an
//! `mpsc` channel. Its handle lives in a `FetchGuard` that aborts the task
//! on drop, so quitting mid-fetch never applies a late result.

mod component;
mod components;
mod event;
mod hit_map;
mod ui;

use log::{debug, error, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, LoadState};
use crate::core::view::derive_view;
use crate::countries::{CountrySource, RestCountriesClient};
use crate::tui::component::EventHandler;
use crate::tui::components::country_grid::Move;
use crate::tui::components::{CountryGridState, DetailModalState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::hit_map::{Hit, HitMap};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub search_bar: SearchBar,
    pub grid: CountryGridState,
    pub detail: DetailModalState,
    /// Click targets from the last frame.
    pub hit_map: HitMap,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Aborts the fetch task when dropped.
pub struct FetchGuard {
    handle: tokio::task::AbortHandle,
}

impl FetchGuard {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            info!("Aborting outstanding country fetch");
            self.handle.abort();
        }
    }
}

/// Spawns the one startup fetch. Exactly one settle action is sent, unless
/// the guard is dropped first.
pub fn spawn_fetch(source: Arc<dyn CountrySource>, tx: mpsc::Sender<Action>) -> FetchGuard {
    info!("Spawning country fetch via {}", source.name());

    let handle = tokio::spawn(async move {
        let action = match source.fetch_all().await {
            Ok(countries) => Action::CountriesLoaded(countries),
            Err(e) => {
                error!("Error fetching countries from {}: {}", source.name(), e);
                Action::FetchFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Discarding fetch result: receiver dropped");
        }
    });

    FetchGuard {
        handle: handle.abort_handle(),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = RestCountriesClient::new(Some(config.api_url.clone()), config.request_timeout)
        .map_err(std::io::Error::other)?;
    let source: Arc<dyn CountrySource> = Arc::new(client);

    let mut app = App::new();
    let mut tui = TuiState::new();

    // Channel for the fetch result
    let (tx, rx) = mpsc::channel();
    let fetch_guard = spawn_fetch(source, tx);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &rx);

    drop(fetch_guard);
    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();

        if needs_redraw || animating {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if handle_event(app, tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quitting");
            return Ok(());
        }

        // Handle the fetch result
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received fetch result");
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Routes one terminal event to the overlay, the search bar or the grid,
/// dispatching whatever core actions it implies.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    // Nothing to browse yet (or ever): only quitting is meaningful
    if !matches!(app.load_state, LoadState::Loaded(_)) {
        return match event {
            TuiEvent::Escape => update(app, Action::Quit),
            _ => Effect::None,
        };
    }

    let effect = if app.selected_country.is_some() {
        handle_detail_event(app, tui, event)
    } else {
        handle_browse_event(app, tui, event)
    };

    let view = derive_view(app);
    tui.grid.sync(view.current_page, view.page_items.len());
    effect
}

fn handle_detail_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape | TuiEvent::Submit => update(app, Action::CloseDetail),
        TuiEvent::CursorUp | TuiEvent::ScrollUp => {
            tui.detail.scroll_up();
            Effect::None
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
            tui.detail.scroll_down();
            Effect::None
        }
        // Clicking anywhere but the overlay body dismisses it
        TuiEvent::MouseClick(col, row) => match tui.hit_map.hit_test(col, row) {
            Some(Hit::DetailBody) => Effect::None,
            _ => update(app, Action::CloseDetail),
        },
        _ => Effect::None,
    }
}

fn handle_browse_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let page_len = derive_view(app).page_items.len();

    match event {
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
            match tui.search_bar.handle_event(&event) {
                Some(SearchEvent::Changed(query)) => change_query(app, tui, query),
                None => Effect::None,
            }
        }
        TuiEvent::Escape => match tui.search_bar.clear() {
            Some(SearchEvent::Changed(query)) => change_query(app, tui, query),
            None => update(app, Action::Quit),
        },
        TuiEvent::ToggleSort => update(app, Action::ToggleSort),
        TuiEvent::CursorUp | TuiEvent::ScrollUp => move_cursor(tui, Move::Up, page_len),
        TuiEvent::CursorDown | TuiEvent::ScrollDown => move_cursor(tui, Move::Down, page_len),
        TuiEvent::CursorLeft => move_cursor(tui, Move::Left, page_len),
        TuiEvent::CursorRight => move_cursor(tui, Move::Right, page_len),
        TuiEvent::PageUp => update(app, Action::PrevPage),
        TuiEvent::PageDown => update(app, Action::NextPage),
        TuiEvent::Home => update(app, Action::FirstPage),
        TuiEvent::End => update(app, Action::LastPage),
        TuiEvent::Submit if page_len > 0 => {
            let slot = tui.grid.cursor;
            open_detail(app, tui, slot)
        }
        TuiEvent::MouseClick(col, row) => match tui.hit_map.hit_test(col, row) {
            Some(Hit::Card(slot)) => {
                tui.grid.cursor = slot;
                open_detail(app, tui, slot)
            }
            Some(Hit::Page(page)) => update(app, Action::GoToPage(page)),
            Some(Hit::SortToggle) => update(app, Action::ToggleSort),
            _ => Effect::None,
        },
        _ => Effect::None,
    }
}

fn change_query(app: &mut App, tui: &mut TuiState, query: String) -> Effect {
    tui.grid.reset();
    update(app, Action::QueryChanged(query))
}

fn move_cursor(tui: &mut TuiState, direction: Move, page_len: usize) -> Effect {
    tui.grid.move_cursor(direction, page_len);
    Effect::None
}

fn open_detail(app: &mut App, tui: &mut TuiState, slot: usize) -> Effect {
    tui.detail.reset();
    update(app, Action::OpenDetail(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::FetchError;
    use crate::test_support::{FakeSource, loaded_app, numbered_countries, sample_countries};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn page_names(app: &App) -> Vec<String> {
        derive_view(app)
            .page_items
            .iter()
            .map(|c| c.common_name().to_string())
            .collect()
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_filters_and_escape_clears_then_quits() {
        let mut app = loaded_app(sample_countries());
        let mut tui = TuiState::new();

        type_text(&mut app, &mut tui, "br");
        assert_eq!(app.search_query, "br");
        assert_eq!(page_names(&app), vec!["Brazil"]);

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::None);
        assert_eq!(app.search_query, "");
        assert_eq!(page_names(&app).len(), 3);

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);
    }

    #[test]
    fn test_tab_toggles_sort() {
        let mut app = loaded_app(sample_countries());
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::ToggleSort);
        assert_eq!(page_names(&app), vec!["Chile", "Brazil", "Bolivia"]);
    }

    #[test]
    fn test_enter_opens_selected_card_and_escape_closes() {
        let mut app = loaded_app(sample_countries());
        let mut tui = TuiState::new();
        tui.grid.columns = 1;

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.selected().map(|c| c.common_name()), Some("Brazil"));

        // typing is swallowed while the overlay is open
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('z'));
        assert_eq!(app.search_query, "");

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(app.selected_country.is_none());
        assert_eq!(app.all_countries().len(), 3);
    }

    #[test]
    fn test_page_keys_move_and_reset_cursor() {
        let mut app = loaded_app(numbered_countries(60));
        let mut tui = TuiState::new();
        tui.grid.columns = 2;

        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(tui.grid.cursor, 1);
        handle_event(&mut app, &mut tui, TuiEvent::PageDown);
        assert_eq!(app.current_page, 2);
        assert_eq!(tui.grid.cursor, 0);
        handle_event(&mut app, &mut tui, TuiEvent::End);
        assert_eq!(app.current_page, 3);
        handle_event(&mut app, &mut tui, TuiEvent::PageDown);
        assert_eq!(app.current_page, 3);
        handle_event(&mut app, &mut tui, TuiEvent::Home);
        assert_eq!(app.current_page, 1);
        handle_event(&mut app, &mut tui, TuiEvent::PageUp);
        assert_eq!(app.current_page, 1);
    }

    #[test]
    fn test_loading_ignores_input_but_allows_quit() {
        let mut app = App::new();
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('a')), Effect::None);
        assert_eq!(app.search_query, "");
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_loading_screen_shows_indicator() {
        let app = App::new();
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 24);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Search"));
    }

    #[test]
    fn test_fetch_failure_shows_error_not_empty_grid() {
        let mut app = App::new();
        update(&mut app, Action::FetchFailed("network error: connection refused".into()));
        assert!(!app.is_loading());

        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 24);
        assert!(screen.contains("Could not load countries"));
        assert!(screen.contains("connection refused"));
        assert!(!screen.contains("Search"));
    }

    #[test]
    fn test_loaded_screen_shows_cards_and_pages() {
        let app = loaded_app(sample_countries());
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 120, 40);
        assert!(screen.contains("Search"));
        assert!(screen.contains("Republic of Bolivia"));
        assert!(screen.contains("Republic of Chile"));
        assert!(screen.contains("Sort A→Z"));
        assert!(screen.contains("3 matches | page 1/1"));
    }

    #[test]
    fn test_no_matches_message() {
        let mut app = loaded_app(sample_countries());
        let mut tui = TuiState::new();
        type_text(&mut app, &mut tui, "zz");
        let screen = draw(&app, &mut tui, 120, 40);
        assert!(screen.contains("No countries match \"zz\""));
    }

    #[test]
    fn test_mouse_click_card_page_and_close() {
        let mut app = loaded_app(numbered_countries(30));
        let mut tui = TuiState::new();
        draw(&app, &mut tui, 120, 40);

        // Page button "2": " 1 " at x 0..3, " 2 " at x 4..7 on the pagination row (y 38)
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(5, 38));
        assert_eq!(app.current_page, 2);

        // First card sits just below the search bar (title row + 3 rows)
        draw(&app, &mut tui, 120, 40);
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(5, 6));
        assert_eq!(app.selected().map(|c| c.common_name()), Some("Country 026"));

        // Overlay is 84x28 at (18, 6); its "[x]" ends left of the corner
        draw(&app, &mut tui, 120, 40);
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(50, 20));
        assert!(app.selected_country.is_some());
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(99, 6));
        assert!(app.selected_country.is_none());
    }

    #[test]
    fn test_mouse_click_sort_toggle() {
        let mut app = loaded_app(sample_countries());
        let mut tui = TuiState::new();
        draw(&app, &mut tui, 120, 40);
        // Sort indicator is the last 20 columns of the search row
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(110, 2));
        assert_eq!(page_names(&app), vec!["Chile", "Brazil", "Bolivia"]);
    }

    #[tokio::test]
    async fn test_spawn_fetch_delivers_countries() {
        let (tx, rx) = mpsc::channel();
        let source = Arc::new(FakeSource {
            result: Ok(sample_countries()),
        });
        let guard = spawn_fetch(source, tx);

        let action = tokio::task::spawn_blocking(move || {
            rx.recv_timeout(std::time::Duration::from_secs(5))
        })
        .await
        .unwrap()
        .unwrap();

        let mut app = App::new();
        update(&mut app, action);
        assert_eq!(app.all_countries().len(), 3);
        drop(guard);
    }

    #[tokio::test]
    async fn test_spawn_fetch_reports_failure() {
        let (tx, rx) = mpsc::channel();
        let source = Arc::new(FakeSource {
            result: Err(FetchError::Api {
                status: 500,
                message: "boom".into(),
            }),
        });
        let _guard = spawn_fetch(source, tx);

        let action = tokio::task::spawn_blocking(move || {
            rx.recv_timeout(std::time::Duration::from_secs(5))
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(action, Action::FetchFailed("API error (HTTP 500): boom".into()));
    }

    struct NeverSource;

    #[async_trait::async_trait]
    impl CountrySource for NeverSource {
        fn name(&self) -> &str {
            "never"
        }

        async fn fetch_all(&self) -> Result<Vec<crate::countries::Country>, FetchError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_dropping_guard_discards_fetch() {
        let (tx, rx) = mpsc::channel();
        let guard = spawn_fetch(Arc::new(NeverSource), tx);
        assert!(!guard.is_finished());
        drop(guard);

        // Give the runtime a chance to drop the aborted task (and its sender)
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected));
    }
}
