//! Handler tests: state transitions, invariants, and the stale-response
//! guard, exercised through the public update() entry point.

use skycast_core::{Condition, WeatherSnapshot};

use crate::handler::{handle_key, update, UpdateAction};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

fn snapshot_for(city: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        city: city.to_string(),
        country: "GB".to_string(),
        observed_at: 1_700_000_000,
        utc_offset_secs: 0,
        temp_c: 15.4,
        temp_min_c: 12.1,
        temp_max_c: 17.9,
        feels_like_c: 14.8,
        humidity_pct: 72,
        pressure_hpa: 1013,
        visibility_m: 10_000,
        wind_speed_mps: 4.1,
        wind_deg: 200.0,
        wind_gust_mps: None,
        sunrise_at: 1_699_970_000,
        sunset_at: 1_700_003_000,
        latitude: 51.51,
        longitude: -0.13,
        condition: Condition::Clear,
        icon: "01d".to_string(),
        description: "clear sky".to_string(),
    }
}

/// Run `update`, following follow-up messages, collecting actions.
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}

#[test]
fn test_initial_mount_state() {
    let state = AppState::new("London");
    assert_eq!(state.selected_city, "London");
    assert!(state.loading);
    assert!(state.snapshot.is_none());
    assert!(state.error.is_none());
}

#[test]
fn test_search_does_not_touch_selection_or_fetch() {
    let mut state = AppState::new("London");
    let actions = drive(&mut state, Message::SearchChanged("Lon".to_string()));

    assert!(actions.is_empty(), "search must not trigger a fetch");
    assert_eq!(state.search.suggestions, vec!["London"]);
    assert_eq!(state.selected_city, "London");
    assert_eq!(state.search.query, "Lon");
}

#[test]
fn test_select_city_emits_tagged_fetch_action() {
    let mut state = AppState::new("London");
    let actions = drive(&mut state, Message::SelectCity("Tokyo".to_string()));

    assert_eq!(actions.len(), 1);
    let UpdateAction::FetchWeather { city, request_id } = &actions[0];
    assert_eq!(city, "Tokyo");
    assert!(state.fetch.is_current(*request_id));
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn test_fetch_succeeded_invariants() {
    let mut state = AppState::new("London");
    let actions = drive(&mut state, Message::SelectCity("London".to_string()));
    let UpdateAction::FetchWeather { request_id, .. } = actions[0].clone();

    drive(
        &mut state,
        Message::FetchSucceeded {
            request_id,
            snapshot: Box::new(snapshot_for("London")),
        },
    );

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.snapshot.as_ref().unwrap().city, "London");
}

#[test]
fn test_fetch_failed_invariants_and_snapshot_retention() {
    let mut state = AppState::new("London");

    // First fetch succeeds
    let actions = drive(&mut state, Message::SelectCity("London".to_string()));
    let UpdateAction::FetchWeather { request_id, .. } = actions[0].clone();
    drive(
        &mut state,
        Message::FetchSucceeded {
            request_id,
            snapshot: Box::new(snapshot_for("London")),
        },
    );

    // Second fetch fails: error set, loading cleared, snapshot untouched
    let actions = drive(&mut state, Message::SelectCity("Nowhere".to_string()));
    let UpdateAction::FetchWeather { request_id, .. } = actions[0].clone();
    drive(
        &mut state,
        Message::FetchFailed {
            request_id,
            city: "Nowhere".to_string(),
            message: "Weather API request failed with status 404: city not found".to_string(),
        },
    );

    assert!(!state.loading);
    assert!(state.error.as_ref().unwrap().contains("404"));
    assert_eq!(
        state.snapshot.as_ref().unwrap().city,
        "London",
        "failed fetch must leave the previous snapshot in place"
    );
}

#[test]
fn test_stale_success_for_superseded_selection_is_discarded() {
    let mut state = AppState::new("London");

    let actions = drive(&mut state, Message::SelectCity("London".to_string()));
    let UpdateAction::FetchWeather {
        request_id: london_id,
        ..
    } = actions[0].clone();

    // User selects Tokyo while the London fetch is outstanding
    let actions = drive(&mut state, Message::SelectCity("Tokyo".to_string()));
    let UpdateAction::FetchWeather {
        request_id: tokyo_id,
        ..
    } = actions[0].clone();

    // Tokyo resolves first
    drive(
        &mut state,
        Message::FetchSucceeded {
            request_id: tokyo_id,
            snapshot: Box::new(snapshot_for("Tokyo")),
        },
    );
    // The late London response must not overwrite Tokyo's data
    drive(
        &mut state,
        Message::FetchSucceeded {
            request_id: london_id,
            snapshot: Box::new(snapshot_for("London")),
        },
    );

    assert_eq!(state.snapshot.as_ref().unwrap().city, "Tokyo");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn test_stale_failure_is_discarded() {
    let mut state = AppState::new("London");

    let actions = drive(&mut state, Message::SelectCity("London".to_string()));
    let UpdateAction::FetchWeather {
        request_id: london_id,
        ..
    } = actions[0].clone();

    let actions = drive(&mut state, Message::SelectCity("Tokyo".to_string()));
    let UpdateAction::FetchWeather {
        request_id: tokyo_id,
        ..
    } = actions[0].clone();

    drive(
        &mut state,
        Message::FetchSucceeded {
            request_id: tokyo_id,
            snapshot: Box::new(snapshot_for("Tokyo")),
        },
    );
    drive(
        &mut state,
        Message::FetchFailed {
            request_id: london_id,
            city: "London".to_string(),
            message: "timed out".to_string(),
        },
    );

    assert!(state.error.is_none(), "stale failure must not set the banner");
    assert_eq!(state.snapshot.as_ref().unwrap().city, "Tokyo");
}

#[test]
fn test_reselect_same_city_refetches() {
    let mut state = AppState::new("London");

    let first = drive(&mut state, Message::SelectCity("London".to_string()));
    let second = drive(&mut state, Message::SelectCity("London".to_string()));

    let UpdateAction::FetchWeather { request_id: a, .. } = first[0].clone();
    let UpdateAction::FetchWeather { request_id: b, .. } = second[0].clone();
    assert_ne!(a, b, "no idempotence guard: every selection re-fetches");
}

#[test]
fn test_refresh_reselects_current_city() {
    let mut state = AppState::new("Berlin");
    let actions = drive(&mut state, Message::RefreshWeather);
    let UpdateAction::FetchWeather { city, .. } = &actions[0];
    assert_eq!(city, "Berlin");
}

#[test]
fn test_select_city_by_index() {
    let mut state = AppState::new("London");

    let actions = drive(&mut state, Message::SelectCityByIndex(9));
    let UpdateAction::FetchWeather { city, .. } = &actions[0];
    assert_eq!(city, "Berlin");

    // Out of range is ignored
    let actions = drive(&mut state, Message::SelectCityByIndex(10));
    assert!(actions.is_empty());
}

#[test]
fn test_next_and_previous_city_cycle() {
    let mut state = AppState::new("London");

    let actions = drive(&mut state, Message::NextCity);
    let UpdateAction::FetchWeather { city, .. } = &actions[0];
    assert_eq!(city, "New York");

    let actions = drive(&mut state, Message::PreviousCity);
    let UpdateAction::FetchWeather { city, .. } = &actions[0];
    assert_eq!(city, "London");

    // Wrap backwards from the head of the list
    let actions = drive(&mut state, Message::PreviousCity);
    let UpdateAction::FetchWeather { city, .. } = &actions[0];
    assert_eq!(city, "Berlin");
}

#[test]
fn test_cycle_from_city_outside_popular_list() {
    let mut state = AppState::new("Reykjavik");
    let actions = drive(&mut state, Message::NextCity);
    let UpdateAction::FetchWeather { city, .. } = &actions[0];
    assert_eq!(city, "London");

    let mut state = AppState::new("Reykjavik");
    let actions = drive(&mut state, Message::PreviousCity);
    let UpdateAction::FetchWeather { city, .. } = &actions[0];
    assert_eq!(city, "Berlin");
}

#[test]
fn test_quit() {
    let mut state = AppState::new("London");
    drive(&mut state, Message::Quit);
    assert!(state.should_quit);
}

#[test]
fn test_tick_advances_spinner_only_while_loading() {
    let mut state = AppState::new("London");
    state.loading = true;
    drive(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 1);

    state.loading = false;
    drive(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 1);
}

// ─────────────────────────────────────────────────────────────────
// Key handling
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_slash_opens_search_prompt() {
    let state = AppState::new("London");
    assert!(matches!(
        handle_key(&state, InputKey::Char('/')),
        Some(Message::StartSearch)
    ));
}

#[test]
fn test_typing_builds_query() {
    let mut state = AppState::new("London");
    state.search.active = true;
    state.search.set_query("Lo");

    match handle_key(&state, InputKey::Char('n')) {
        Some(Message::SearchChanged(query)) => assert_eq!(query, "Lon"),
        other => panic!("expected SearchChanged, got {other:?}"),
    }

    match handle_key(&state, InputKey::Backspace) {
        Some(Message::SearchChanged(query)) => assert_eq!(query, "L"),
        other => panic!("expected SearchChanged, got {other:?}"),
    }
}

#[test]
fn test_enter_selects_highlighted_suggestion() {
    let mut state = AppState::new("London");
    state.search.active = true;
    state.search.set_query("o");
    state.search.highlight_down(); // New York

    match handle_key(&state, InputKey::Enter) {
        Some(Message::SelectCity(city)) => assert_eq!(city, "New York"),
        other => panic!("expected SelectCity, got {other:?}"),
    }
}

#[test]
fn test_enter_with_unmatched_query_submits_raw_text() {
    let mut state = AppState::new("London");
    state.search.active = true;
    state.search.set_query("Reykjavik");
    assert!(state.search.suggestions.is_empty());

    match handle_key(&state, InputKey::Enter) {
        Some(Message::SelectCity(city)) => assert_eq!(city, "Reykjavik"),
        other => panic!("expected SelectCity, got {other:?}"),
    }
}

#[test]
fn test_enter_with_empty_query_does_nothing() {
    let mut state = AppState::new("London");
    state.search.active = true;
    assert!(handle_key(&state, InputKey::Enter).is_none());
}

#[test]
fn test_esc_cancels_search_but_quits_normal_mode() {
    let mut state = AppState::new("London");
    state.search.active = true;
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CancelSearch)
    ));

    state.search.active = false;
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Quit)
    ));
}

#[test]
fn test_digit_quick_select() {
    let state = AppState::new("London");
    assert!(matches!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::SelectCityByIndex(0))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('0')),
        Some(Message::SelectCityByIndex(9))
    ));
}

#[test]
fn test_q_is_text_in_search_mode() {
    let mut state = AppState::new("London");
    state.search.active = true;
    match handle_key(&state, InputKey::Char('q')) {
        Some(Message::SearchChanged(query)) => assert_eq!(query, "q"),
        other => panic!("expected SearchChanged, got {other:?}"),
    }
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let mut state = AppState::new("London");
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
    state.search.active = true;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}
