//! Weather observation domain types
//!
//! [`WeatherSnapshot`] is one point-in-time observation for a city, as
//! returned by the provider API. Timestamps are raw UTC epoch seconds; the
//! formatter in [`crate::metrics`] shifts them by the station's UTC offset.

use serde::{Deserialize, Serialize};

/// Primary weather condition.
///
/// The provider reports a free-form string; everything outside this closed
/// set collapses to [`Condition::Unknown`], which maps to the neutral
/// fallback theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
    #[default]
    Unknown,
}

impl Condition {
    /// Map the provider's `weather[0].main` string onto the closed set.
    pub fn from_main(main: &str) -> Self {
        match main {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Snow" => Self::Snow,
            "Thunderstorm" => Self::Thunderstorm,
            "Drizzle" => Self::Drizzle,
            "Mist" => Self::Mist,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Mist => "Mist",
            Self::Unknown => "Unknown",
        }
    }

    /// The seven conditions with a dedicated theme.
    pub const fn known() -> &'static [Condition] {
        &[
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Snow,
            Condition::Thunderstorm,
            Condition::Drizzle,
            Condition::Mist,
        ]
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One current-conditions observation for a city.
///
/// All numeric fields are finite; the API client guarantees the nested
/// objects it was parsed from were present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Resolved city name as reported by the provider
    pub city: String,
    /// ISO country code ("GB", "JP", ...)
    pub country: String,
    /// Observation time, UTC epoch seconds
    pub observed_at: i64,
    /// Station UTC offset in seconds
    pub utc_offset_secs: i32,

    pub temp_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub feels_like_c: f64,

    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    /// Visibility in metres (provider caps this at 10 km)
    pub visibility_m: u32,

    pub wind_speed_mps: f64,
    /// Meteorological wind direction in degrees
    pub wind_deg: f64,
    pub wind_gust_mps: Option<f64>,

    /// Sunrise/sunset, UTC epoch seconds
    pub sunrise_at: i64,
    pub sunset_at: i64,

    pub latitude: f64,
    pub longitude: f64,

    pub condition: Condition,
    /// Provider icon identifier (e.g. "01d")
    pub icon: String,
    /// Human description string ("scattered clouds", ...)
    pub description: String,
}
