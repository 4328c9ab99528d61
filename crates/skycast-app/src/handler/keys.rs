//! Key event handlers for UI modes
//!
//! Translates raw key presses into semantic messages. With the search
//! prompt open, printable keys edit the query; otherwise keys are global
//! shortcuts.

use crate::cities;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Translate a key press into a message for the current mode.
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.search.active {
        handle_search_key(state, key)
    } else {
        handle_normal_key(key)
    }
}

fn handle_search_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut query = state.search.query.clone();
            query.push(c);
            Some(Message::SearchChanged(query))
        }
        InputKey::Backspace => {
            let mut query = state.search.query.clone();
            query.pop();
            Some(Message::SearchChanged(query))
        }
        InputKey::Up => Some(Message::SuggestionUp),
        InputKey::Down => Some(Message::SuggestionDown),
        InputKey::Enter => {
            // Prefer the highlighted suggestion; fall back to the raw
            // query so any city name can be submitted to the API.
            if !state.search.query.is_empty() {
                if let Some(city) = state.search.highlighted_city() {
                    return Some(Message::SelectCity(city.to_string()));
                }
            }
            let query = state.search.query.trim();
            if query.is_empty() {
                None
            } else {
                Some(Message::SelectCity(query.to_string()))
            }
        }
        InputKey::Esc => Some(Message::CancelSearch),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_normal_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::RefreshWeather),
        InputKey::Tab | InputKey::Right => Some(Message::NextCity),
        InputKey::BackTab | InputKey::Left => Some(Message::PreviousCity),
        InputKey::Char(c) if c.is_ascii_digit() => {
            // 1-9 select the first nine popular cities, 0 the tenth
            let index = if c == '0' {
                cities::POPULAR_CITIES.len() - 1
            } else {
                (c as usize) - ('1' as usize)
            };
            Some(Message::SelectCityByIndex(index))
        }
        _ => None,
    }
}
