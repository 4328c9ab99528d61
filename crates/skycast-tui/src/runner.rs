//! Main TUI runner - entry points and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: entry point with the real OpenWeather client
//! - `run_with_provider`: generic entry point (tests inject a fake)
//! - `run_loop`: main event loop processing terminal events and fetch
//!   completions

use std::sync::Arc;

use tokio::sync::mpsc;

use skycast_api::{WeatherClient, WeatherProvider};
use skycast_app::message::Message;
use skycast_app::state::AppState;
use skycast_app::{process_message, signals, LogTelemetry, Settings, SharedTelemetry};
use skycast_core::prelude::*;

use super::{event, render, terminal};

/// Run the dashboard with the real OpenWeather client.
pub async fn run(settings: Settings, initial_city: String) -> Result<()> {
    let api_key = settings.require_api_key()?.to_string();
    let client = WeatherClient::new(settings.endpoint.clone(), api_key)?;
    let telemetry: SharedTelemetry = Arc::new(LogTelemetry);

    run_with_provider(client, telemetry, initial_city).await
}

/// Run the dashboard over any provider.
pub async fn run_with_provider<P>(
    provider: P,
    telemetry: SharedTelemetry,
    initial_city: String,
) -> Result<()>
where
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(initial_city.clone());

    // Unified message channel: fetch completions and signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    telemetry.page_view("dashboard");
    info!("Dashboard starting with initial city '{initial_city}'");

    // Implicit startup fetch for the initial city
    process_message(
        &mut state,
        Message::SelectCity(initial_city),
        &provider,
        &telemetry,
        &msg_tx,
    );

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, provider, telemetry);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<P>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    provider: P,
    telemetry: SharedTelemetry,
) -> Result<()>
where
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    while !state.should_quit {
        // Apply fetch completions and signal messages (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &provider, &telemetry, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (50ms timeout yields a Tick)
        if let Some(message) = event::poll()? {
            process_message(state, message, &provider, &telemetry, &msg_tx);
        }
    }

    info!("Dashboard shutting down");
    Ok(())
}
