//! Semantic style builders for the dashboard theme.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use skycast_core::ThemeColor;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default().fg(palette::TEXT_BRIGHT)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Condition theme mapping ---

/// Map the semantic condition theme color onto a terminal color.
pub fn theme_color(color: ThemeColor) -> Color {
    match color {
        ThemeColor::Yellow => palette::CONDITION_CLEAR,
        ThemeColor::Gray => palette::CONDITION_CLOUDS,
        ThemeColor::Blue => palette::CONDITION_RAIN,
        ThemeColor::Cyan => palette::CONDITION_SNOW,
        ThemeColor::Magenta => palette::CONDITION_THUNDER,
        ThemeColor::LightBlue => palette::CONDITION_DRIZZLE,
        ThemeColor::Neutral => palette::CONDITION_NEUTRAL,
    }
}
