use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, LoadState};
use crate::core::view::derive_view;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryGrid, DetailModal, PageInfo, Pagination, StatusPanel, TitleBar,
};

const HELP_TEXT: &str =
    " Type to search  Tab Sort  ←↑↓→ Move  Enter Details  PgUp/PgDn Page  Esc Clear/Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    // Regions are re-recorded by whatever draws this frame
    tui.hit_map.clear();

    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    match &app.load_state {
        LoadState::Loading => {
            TitleBar::new(app.status_message.clone(), None).render(frame, title_area);
            StatusPanel::Loading { spinner_frame }.render(frame, main_area);
        }
        LoadState::Failed(reason) => {
            TitleBar::new(app.status_message.clone(), None).render(frame, title_area);
            StatusPanel::Failed { reason }.render(frame, main_area);
        }
        LoadState::Loaded(_) => draw_browser(frame, title_area, main_area, app, tui),
    }
}

fn draw_browser(frame: &mut Frame, title_area: Rect, main_area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let view = derive_view(app);
    tui.grid.sync(view.current_page, view.page_items.len());

    TitleBar::new(
        app.status_message.clone(),
        Some(PageInfo {
            match_count: view.match_count,
            current_page: view.current_page,
            total_pages: view.total_pages,
        }),
    )
    .render(frame, title_area);

    let layout = Layout::vertical([Length(3), Min(0), Length(1), Length(1)]);
    let [search_area, grid_area, pages_area, help_area] = layout.areas(main_area);

    tui.search_bar.render(
        frame,
        search_area,
        view.sort_direction,
        view.selected.is_none(),
        &mut tui.hit_map,
    );

    if view.page_items.is_empty() {
        draw_no_matches(frame, grid_area, view.query);
    } else {
        CountryGrid::new(&mut tui.grid, &view.page_items, &mut tui.hit_map)
            .render(frame, grid_area);
    }

    Pagination::new(view.current_page, view.total_pages, &mut tui.hit_map)
        .render(frame, pages_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(country) = view.selected {
        let full = frame.area();
        DetailModal::new(&mut tui.detail, country, &mut tui.hit_map).render(frame, full);
    }
}

fn draw_no_matches(frame: &mut Frame, area: Rect, query: &str) {
    let message = Paragraph::new(Line::from(Span::styled(
        format!("No countries match \"{query}\""),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(message, area);
}
