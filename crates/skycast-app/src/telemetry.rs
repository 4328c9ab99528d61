//! Injected telemetry for page-view and navigation events
//!
//! The host shell records one page view at startup and one navigation
//! event per city selection. Events are fire-and-forget: no return value,
//! no error surface. The sink is injected rather than ambient so tests and
//! headless contexts can swap it out.

use std::sync::Arc;

/// Sink for usage events.
pub trait Telemetry: Send + Sync {
    /// Record that a screen was shown.
    fn page_view(&self, screen: &str);

    /// Record a city navigation event.
    fn city_selected(&self, city: &str);
}

/// Records events through the tracing pipeline.
#[derive(Debug, Default, Clone)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn page_view(&self, screen: &str) {
        tracing::info!(target: "skycast::telemetry", screen, "page view");
    }

    fn city_selected(&self, city: &str) {
        tracing::info!(target: "skycast::telemetry", city, "city selected");
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn page_view(&self, _screen: &str) {}

    fn city_selected(&self, _city: &str) {}
}

/// Shared handle passed to the action dispatcher.
pub type SharedTelemetry = Arc<dyn Telemetry>;
