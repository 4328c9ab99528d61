//! Color palette for the dashboard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(40, 40, 50); // Suggestion dropdown

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text
pub const TEXT_BRIGHT: Color = Color::White; // Bright/emphasis text
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_RED: Color = Color::Red; // Error banner
pub const STATUS_YELLOW: Color = Color::Yellow; // Keybinding hints

// --- Condition theme colors ---
pub const CONDITION_CLEAR: Color = Color::Yellow;
pub const CONDITION_CLOUDS: Color = Color::Gray;
pub const CONDITION_RAIN: Color = Color::Blue;
pub const CONDITION_SNOW: Color = Color::Cyan;
pub const CONDITION_THUNDER: Color = Color::Magenta;
pub const CONDITION_DRIZZLE: Color = Color::LightBlue;
pub const CONDITION_NEUTRAL: Color = Color::DarkGray;
