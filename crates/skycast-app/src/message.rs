//! Message types for the application (TEA pattern)

use skycast_core::WeatherSnapshot;

use crate::input_key::InputKey;

/// Monotonic tag attached to every fetch.
///
/// Completions carry their tag back; the reducer discards any completion
/// whose tag is not the current in-flight fetch, so a late response for a
/// superseded selection can never overwrite newer data.
pub type RequestId = u64;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (skeleton spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Search Prompt Messages
    // ─────────────────────────────────────────────────────────
    /// Open the search prompt
    StartSearch,
    /// Close the search prompt and clear the query
    CancelSearch,
    /// Search query changed; the suggestion list is re-derived
    SearchChanged(String),
    /// Move the suggestion highlight up
    SuggestionUp,
    /// Move the suggestion highlight down
    SuggestionDown,

    // ─────────────────────────────────────────────────────────
    // City Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Select a city and fetch its current conditions
    SelectCity(String),
    /// Select a popular city by list index (keys 1-9 and 0)
    SelectCityByIndex(usize),
    /// Cycle to the next popular city (Tab)
    NextCity,
    /// Cycle to the previous popular city (Shift+Tab)
    PreviousCity,
    /// Re-fetch the currently selected city
    RefreshWeather,

    // ─────────────────────────────────────────────────────────
    // Fetch Completion Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch task resolved with a snapshot
    FetchSucceeded {
        request_id: RequestId,
        snapshot: Box<WeatherSnapshot>,
    },
    /// Fetch task failed; `message` is the banner text
    FetchFailed {
        request_id: RequestId,
        city: String,
        message: String,
    },
}
