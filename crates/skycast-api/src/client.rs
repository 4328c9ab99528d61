//! OpenWeather HTTP client

use std::time::Duration;

use reqwest::Client;
use skycast_core::prelude::*;
use skycast_core::WeatherSnapshot;

use crate::dto::CurrentWeatherDto;
use crate::provider::WeatherProvider;

/// OpenWeather current-weather endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Upper bound on a single request; there is no retry behind it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the current-weather endpoint.
///
/// Stateless apart from connection pooling: every call re-fetches, even for
/// a city fetched moments ago.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot> {
        if city.trim().is_empty() {
            return Err(Error::EmptyCity);
        }

        debug!("Requesting current conditions for '{city}'");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| Error::network(format!("request to weather API failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| Error::network(format!("failed to read weather API response: {e}")))?;

        if !status.is_success() {
            warn!("Weather API returned {status} for '{city}'");
            return Err(Error::http(status.as_u16(), truncate_body(&body)));
        }

        let parsed: CurrentWeatherDto = serde_json::from_str(&body)
            .map_err(|e| Error::parse(format!("invalid current-weather JSON: {e}")))?;

        parsed.into_snapshot()
    }
}

impl WeatherProvider for WeatherClient {
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot> {
        self.fetch(city).await
    }
}

/// Keep error bodies readable in banners and logs.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
