//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::cities;
use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            // Advance the skeleton spinner while a fetch is outstanding
            if state.loading {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Prompt Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.search.active = true;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            state.search.clear();
            state.search.active = false;
            UpdateResult::none()
        }

        Message::SearchChanged(query) => {
            state.search.set_query(query);
            UpdateResult::none()
        }

        Message::SuggestionUp => {
            state.search.highlight_up();
            UpdateResult::none()
        }

        Message::SuggestionDown => {
            state.search.highlight_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // City Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectCity(city) => {
            debug!("Selecting city '{city}'");
            let request_id = state.select_city(city.clone());
            UpdateResult::action(UpdateAction::FetchWeather { city, request_id })
        }

        Message::SelectCityByIndex(index) => match cities::POPULAR_CITIES.get(index) {
            Some(city) => UpdateResult::message(Message::SelectCity((*city).to_string())),
            None => UpdateResult::none(),
        },

        Message::NextCity => {
            UpdateResult::message(Message::SelectCity(neighbor_city(&state.selected_city, 1)))
        }

        Message::PreviousCity => {
            UpdateResult::message(Message::SelectCity(neighbor_city(&state.selected_city, -1)))
        }

        Message::RefreshWeather => {
            UpdateResult::message(Message::SelectCity(state.selected_city.clone()))
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Completion Messages
        // ─────────────────────────────────────────────────────────
        Message::FetchSucceeded {
            request_id,
            snapshot,
        } => {
            if state.fetch.complete(request_id) {
                debug!("Snapshot received for '{}'", snapshot.city);
                state.snapshot = Some(*snapshot);
                state.loading = false;
                state.error = None;
            } else {
                debug!(
                    "Discarding stale snapshot for '{}' (request {request_id})",
                    snapshot.city
                );
            }
            UpdateResult::none()
        }

        Message::FetchFailed {
            request_id,
            city,
            message,
        } => {
            if state.fetch.complete(request_id) {
                warn!("Fetch for '{city}' failed: {message}");
                state.error = Some(message);
                state.loading = false;
            } else {
                debug!("Discarding stale fetch failure for '{city}' (request {request_id})");
            }
            UpdateResult::none()
        }
    }
}

/// Step through the popular list relative to the current selection.
///
/// A selection outside the list (typed via search) lands on the first city
/// going forward and the last going backward.
fn neighbor_city(current: &str, step: isize) -> String {
    let len = cities::POPULAR_CITIES.len() as isize;
    let index = match cities::position(current) {
        Some(i) => (i as isize + step).rem_euclid(len),
        None if step > 0 => 0,
        None => len - 1,
    };
    cities::POPULAR_CITIES[index as usize].to_string()
}
