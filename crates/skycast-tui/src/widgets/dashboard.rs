//! Full dashboard for a weather snapshot
//!
//! Layout mirrors the classic weather-dashboard arrangement: a main card
//! themed by condition, side panels for comfort and wind, a bottom grid
//! for visibility/pressure/sunrise/sunset, and a location strip.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use skycast_core::{DerivedMetrics, WeatherSnapshot};

use crate::theme::{icons, palette, styles};

pub struct Dashboard<'a> {
    snapshot: &'a WeatherSnapshot,
    metrics: &'a DerivedMetrics,
}

impl<'a> Dashboard<'a> {
    pub fn new(snapshot: &'a WeatherSnapshot, metrics: &'a DerivedMetrics) -> Self {
        Self { snapshot, metrics }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

        let top = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);
        self.render_main_card(top[0], buf);

        let side = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(top[1]);
        self.render_comfort_panel(side[0], buf);
        self.render_wind_panel(side[1], buf);

        self.render_bottom_grid(rows[1], buf);
        self.render_location_panel(rows[2], buf);
    }
}

impl Dashboard<'_> {
    /// Main card: city, observation time, big temperature, description,
    /// and the min/max strip. Border and temperature take the condition
    /// theme color (the TUI's background-image equivalent).
    fn render_main_card(&self, area: Rect, buf: &mut Buffer) {
        let color = styles::theme_color(self.metrics.theme.color);
        let glyph = icons::condition_glyph(self.metrics.condition);

        let block = styles::glass_block(false)
            .title(format!(" {glyph} {} ", self.metrics.condition))
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title_spans = vec![Span::styled(
            self.snapshot.city.clone(),
            styles::text_bright().add_modifier(Modifier::BOLD),
        )];
        if !self.snapshot.country.is_empty() {
            title_spans.push(Span::styled(
                format!(", {}", self.snapshot.country),
                styles::text_secondary(),
            ));
        }
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(
            self.metrics.observed.clone(),
            styles::text_muted(),
        ));

        let lines = vec![
            Line::from(title_spans),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("{}°C", self.metrics.temperature_c),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(capitalize(&self.metrics.description), styles::text_primary()),
            ]),
            Line::from(Span::styled(
                self.metrics.theme.description,
                styles::text_muted(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("↓ ", styles::text_muted()),
                Span::styled(
                    format!("{}°C", self.metrics.temp_min_c),
                    styles::text_primary(),
                ),
                Span::styled("   ↑ ", styles::text_muted()),
                Span::styled(
                    format!("{}°C", self.metrics.temp_max_c),
                    styles::text_primary(),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_comfort_panel(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Comfort ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let feels_like = Line::from(vec![
            Span::styled("Feels Like  ", styles::text_muted()),
            Span::styled(
                format!("{}°C", self.metrics.feels_like_c),
                styles::text_bright().add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(inner.x + 1, inner.y, &feels_like, inner.width.saturating_sub(1));

        if inner.height >= 2 {
            let gauge_area = Rect::new(
                inner.x + 1,
                inner.y + 1,
                inner.width.saturating_sub(2),
                1,
            );
            let ratio = (f64::from(self.metrics.humidity_pct) / 100.0).clamp(0.0, 1.0);
            Gauge::default()
                .ratio(ratio)
                .label(format!("Humidity {}%", self.metrics.humidity_pct))
                .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::CARD_BG))
                .use_unicode(true)
                .render(gauge_area, buf);
        }
    }

    fn render_wind_panel(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Wind ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Speed      ", styles::text_muted()),
                Span::styled(
                    format!("{:.1} m/s", self.metrics.wind_speed_mps),
                    styles::text_bright().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Direction  ", styles::text_muted()),
                Span::styled(
                    self.metrics.wind_direction,
                    styles::text_bright().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({:.0}°)", self.metrics.wind_deg),
                    styles::text_secondary(),
                ),
            ]),
        ];
        if let Some(gust) = self.metrics.wind_gust_mps {
            lines.push(Line::from(vec![
                Span::styled("Gusts      ", styles::text_muted()),
                Span::styled(
                    format!("{gust:.1} m/s"),
                    styles::text_bright().add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        for (i, line) in lines.iter().enumerate() {
            if (i as u16) < inner.height {
                buf.set_line(
                    inner.x + 1,
                    inner.y + i as u16,
                    line,
                    inner.width.saturating_sub(1),
                );
            }
        }
    }

    fn render_bottom_grid(&self, area: Rect, buf: &mut Buffer) {
        let cells = [
            ("Visibility", format!("{} km", self.metrics.visibility_km)),
            ("Pressure", format!("{} hPa", self.metrics.pressure_hpa)),
            ("Sunrise", self.metrics.sunrise.clone()),
            ("Sunset", self.metrics.sunset.clone()),
        ];

        let grid = Layout::horizontal([Constraint::Percentage(25); 4]).split(area);
        for ((title, value), cell) in cells.iter().zip(grid.iter()) {
            let block = styles::glass_block(false)
                .title(format!(" {title} "))
                .style(Style::default().bg(palette::CARD_BG));
            let inner = block.inner(*cell);
            block.render(*cell, buf);

            if inner.height == 0 || inner.width == 0 {
                continue;
            }
            Paragraph::new(Line::from(Span::styled(
                value.clone(),
                styles::text_bright().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .render(inner, buf);
        }
    }

    fn render_location_panel(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Location ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled("Lat ", styles::text_muted()),
            Span::styled(format!("{:.2}°", self.metrics.latitude), styles::text_primary()),
            Span::styled("  Lon ", styles::text_muted()),
            Span::styled(
                format!("{:.2}°", self.metrics.longitude),
                styles::text_primary(),
            ),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(self.metrics.utc_offset.clone(), styles::text_primary()),
            Span::styled("  │  Local ", styles::text_muted()),
            Span::styled(self.metrics.local_time.clone(), styles::text_primary()),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Uppercase the first letter of the provider's description string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
