//! Abstraction over weather data sources

use skycast_core::prelude::*;
use skycast_core::WeatherSnapshot;

/// A source of current-conditions observations.
///
/// The app layer is generic over this trait so the state machine can be
/// driven by a scripted fake in tests instead of the network.
#[trait_variant::make(WeatherProvider: Send)]
pub trait LocalWeatherProvider {
    /// Fetch current conditions for a city by name.
    ///
    /// One HTTP GET per call; no retry, no caching. Invalid city names are
    /// resolved by the remote API returning an error status.
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot>;
}
