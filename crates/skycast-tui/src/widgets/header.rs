//! Header bar widget
//!
//! Shows the app title, today's date, and the keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing app title, keybindings, and the current date
pub struct MainHeader<'a> {
    date: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(date: &'a str) -> Self {
        Self { date }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left section: title
        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Skycast",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled("Weather Dashboard", styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        // Center section: shortcut hints
        let shortcuts_line = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("/", styles::keybinding()),
            Span::styled("] Search  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled("] Cities  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("r", styles::keybinding()),
            Span::styled("] Refresh  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit", styles::text_muted()),
        ]);
        let shortcuts_width = shortcuts_line.width() as u16;

        // Right section: today's date
        let date_line = Line::from(vec![
            Span::styled(self.date, styles::text_secondary()),
            Span::raw(" "),
        ]);
        let date_width = date_line.width() as u16;

        let total = left_width + shortcuts_width + date_width + 4;

        if total <= inner.width {
            buf.set_line(inner.x, inner.y, &left_line, inner.width);

            let shortcuts_x = inner.x + (inner.width.saturating_sub(shortcuts_width)) / 2;
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);

            let date_x = inner.x + inner.width - date_width;
            buf.set_line(date_x, inner.y, &date_line, date_width);
        } else if left_width + date_width + 2 <= inner.width {
            // Shortcuts don't fit, keep title and date
            buf.set_line(inner.x, inner.y, &left_line, inner.width);
            let date_x = inner.x + inner.width - date_width;
            buf.set_line(date_x, inner.y, &date_line, date_width);
        } else {
            // Only the title fits
            buf.set_line(inner.x, inner.y, &left_line, inner.width);
        }
    }
}
