//! Loading skeleton
//!
//! Placeholder layout shown while a fetch is outstanding: the dashboard's
//! grid rendered as empty dim cards, with a spinner and status line over
//! the main card. No data is displayed.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons, palette, styles};

pub struct LoadingSkeleton<'a> {
    city: &'a str,
    frame: u64,
}

impl<'a> LoadingSkeleton<'a> {
    pub fn new(city: &'a str, frame: u64) -> Self {
        Self { city, frame }
    }
}

impl Widget for LoadingSkeleton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Same grid as the dashboard, every cell an empty card
        let rows = Layout::vertical([
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

        let top = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);
        placeholder_card(top[0], buf);

        let side = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(top[1]);
        placeholder_card(side[0], buf);
        placeholder_card(side[1], buf);

        let grid = Layout::horizontal([Constraint::Percentage(25); 4]).split(rows[1]);
        for cell in grid.iter() {
            placeholder_card(*cell, buf);
        }

        placeholder_card(rows[2], buf);

        // Spinner + status centered on the main card
        let spinner = icons::SPINNER[(self.frame as usize) % icons::SPINNER.len()];
        let line = Line::from(vec![
            Span::styled(
                spinner,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("Fetching weather for {}...", self.city),
                styles::text_secondary(),
            ),
        ]);

        if top[0].height > 2 && top[0].width > 4 {
            let width = top[0].width - 4;
            let x = top[0].x + 2 + width.saturating_sub(line.width() as u16) / 2;
            let y = top[0].y + top[0].height / 2;
            buf.set_line(x, y, &line, width);
        }
    }
}

fn placeholder_card(area: Rect, buf: &mut Buffer) {
    styles::glass_block(false)
        .style(Style::default().bg(palette::CARD_BG))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_skeleton_shows_spinner_message() {
        let mut term = TestTerminal::new();
        term.render_widget(LoadingSkeleton::new("London", 0), term.area());

        assert!(term.buffer_contains("Fetching weather for London..."));
    }

    #[test]
    fn test_skeleton_shows_no_data() {
        let mut term = TestTerminal::new();
        term.render_widget(LoadingSkeleton::new("Tokyo", 3), term.area());

        assert!(!term.buffer_contains("°C"));
        assert!(!term.buffer_contains("hPa"));
    }

    #[test]
    fn test_spinner_frames_cycle() {
        for frame in 0..icons::SPINNER.len() as u64 * 2 {
            let mut term = TestTerminal::new();
            term.render_widget(LoadingSkeleton::new("Paris", frame), term.area());
            let expected = icons::SPINNER[(frame as usize) % icons::SPINNER.len()];
            assert!(term.buffer_contains(expected), "frame {frame}");
        }
    }

    #[test]
    fn test_skeleton_survives_tiny_area() {
        let mut term = TestTerminal::with_size(10, 3);
        term.render_widget(LoadingSkeleton::new("London", 0), term.area());
    }
}
