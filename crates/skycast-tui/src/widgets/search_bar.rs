//! Search bar widget
//!
//! Renders the city search prompt. The suggestion dropdown itself is an
//! overlay drawn by the render layer so it can float over the content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skycast_app::state::SearchState;

use crate::theme::{palette, styles};

pub struct SearchBar<'a> {
    search: &'a SearchState,
}

impl<'a> SearchBar<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self { search }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.search.active)
            .title(" Search ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = if self.search.active {
            let mut spans = vec![
                Span::styled(
                    "/",
                    Style::default()
                        .fg(palette::STATUS_YELLOW)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(self.search.query.clone(), styles::text_primary()),
                Span::styled("_", Style::default().fg(palette::STATUS_YELLOW)),
            ];

            if !self.search.query.is_empty() {
                let count = self.search.suggestions.len();
                let status = match count {
                    0 => "no matches".to_string(),
                    1 => "1 match".to_string(),
                    n => format!("{n} matches"),
                };
                let status_style = if count > 0 {
                    Style::default().fg(ratatui::style::Color::Green)
                } else {
                    styles::status_red()
                };
                spans.push(Span::raw("  "));
                spans.push(Span::styled(status, status_style));
            }

            Line::from(spans)
        } else {
            Line::from(Span::styled(
                "Press / to search for a city",
                styles::text_muted(),
            ))
        };

        Paragraph::new(line).render(inner, buf);
    }
}
