//! Condition glyphs and spinner frames.
//!
//! Plain-unicode glyphs that render single-width in common terminals; the
//! glyph is the TUI's stand-in for the web dashboard's per-condition
//! background image.

use skycast_core::Condition;

/// Braille spinner for the loading skeleton.
pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph shown on the main card, keyed by condition.
pub fn condition_glyph(condition: Condition) -> &'static str {
    match condition {
        Condition::Clear => "☀",
        Condition::Clouds => "☁",
        Condition::Rain => "☂",
        Condition::Snow => "❄",
        Condition::Thunderstorm => "↯",
        Condition::Drizzle => "☔",
        Condition::Mist => "≈",
        Condition::Unknown => "◌",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_condition_has_a_distinct_glyph() {
        let mut seen = std::collections::HashSet::new();
        for condition in Condition::known() {
            assert!(seen.insert(condition_glyph(*condition)));
        }
    }

    #[test]
    fn test_unknown_condition_has_fallback_glyph() {
        assert_eq!(condition_glyph(Condition::Unknown), "◌");
    }

    #[test]
    fn test_spinner_has_frames() {
        assert_eq!(SPINNER.len(), 10);
    }
}
