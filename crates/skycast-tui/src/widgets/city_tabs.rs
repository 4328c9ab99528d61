//! Popular-city quick-select row
//!
//! One pill per city from the fixed list, with the current selection
//! highlighted. Digit keys jump straight to a pill; Tab cycles.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use skycast_app::cities::POPULAR_CITIES;

use crate::theme::styles;

pub struct CityTabs<'a> {
    selected_city: &'a str,
}

impl<'a> CityTabs<'a> {
    pub fn new(selected_city: &'a str) -> Self {
        Self { selected_city }
    }
}

impl Widget for CityTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, city) in POPULAR_CITIES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            if *city == self.selected_city {
                spans.push(Span::styled(format!(" {city} "), styles::focused_selected()));
            } else {
                spans.push(Span::styled((*city).to_string(), styles::text_secondary()));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
