//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use skycast_app::state::{AppState, SearchState};
use skycast_core::DerivedMetrics;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure presentation over the state record: loading shows the skeleton,
/// an error shows the banner (hiding any stale snapshot), a snapshot
/// shows the dashboard, and otherwise the content area stays empty. The
/// city-selection sub-tree renders regardless.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let date = chrono::Local::now().format("%a, %b %e %Y").to_string();
    frame.render_widget(widgets::MainHeader::new(&date), areas.header);

    // City-selection sub-tree always renders
    frame.render_widget(widgets::SearchBar::new(&state.search), areas.search);
    frame.render_widget(widgets::CityTabs::new(&state.selected_city), areas.cities);

    if state.loading {
        frame.render_widget(
            widgets::LoadingSkeleton::new(&state.selected_city, state.animation_frame),
            areas.content,
        );
    } else if let Some(ref message) = state.error {
        frame.render_widget(widgets::ErrorBanner::new(message), areas.content);
    } else if let Some(ref snapshot) = state.snapshot {
        // Recomputed on every render; pure function of the snapshot
        let metrics = DerivedMetrics::from_snapshot(snapshot);
        frame.render_widget(widgets::Dashboard::new(snapshot, &metrics), areas.content);
    }
    // No snapshot, no error, not loading: the content area stays empty

    if state.search.shows_dropdown() {
        render_suggestion_overlay(frame, &areas, &state.search);
    }
}

/// Suggestion dropdown floating directly under the search bar.
fn render_suggestion_overlay(frame: &mut Frame, areas: &layout::ScreenAreas, search: &SearchState) {
    let height = (search.suggestions.len() as u16 + 2).min(8);
    let width = areas.search.width.saturating_sub(2).min(34);
    let overlay = Rect::new(
        areas.search.x + 1,
        areas.search.y + areas.search.height,
        width,
        height,
    )
    .intersection(frame.area());

    if overlay.height == 0 || overlay.width == 0 {
        return;
    }

    frame.render_widget(Clear, overlay);

    let lines: Vec<Line> = search
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, city)| {
            if i == search.highlighted {
                Line::styled(format!(" {city} "), styles::focused_selected())
            } else {
                Line::styled(format!(" {city} "), styles::text_secondary())
            }
        })
        .collect();

    let block = styles::glass_block(true).style(Style::default().bg(palette::POPUP_BG));
    frame.render_widget(Paragraph::new(lines).block(block), overlay);
}
