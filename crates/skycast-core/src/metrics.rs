//! Display-ready metrics derived from a weather snapshot
//!
//! [`DerivedMetrics::from_snapshot`] is a pure function: same snapshot in,
//! same strings out. Nothing here touches the clock or the viewer's
//! timezone — time-of-day strings are computed by shifting the observation
//! epoch by the station's UTC offset.

use chrono::DateTime;

use crate::snapshot::{Condition, WeatherSnapshot};

/// The sixteen compass points, clockwise from north.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Map wind degrees onto the nearest 22.5° compass sector.
///
/// 348.75° and above wraps back to "N" via the modulo.
pub fn compass_point(degrees: f64) -> &'static str {
    let index = ((degrees / 22.5).round() as usize) % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// Semantic theme color for a condition, mapped to a concrete terminal
/// color by the TUI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Yellow,
    Gray,
    Blue,
    LightBlue,
    Cyan,
    Magenta,
    Neutral,
}

/// A (color, description) pair keyed by primary weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionTheme {
    pub color: ThemeColor,
    pub description: &'static str,
}

/// Fixed theme table over the closed condition set; unknown conditions get
/// the neutral fallback.
pub fn condition_theme(condition: Condition) -> ConditionTheme {
    let (color, description) = match condition {
        Condition::Clear => (ThemeColor::Yellow, "Clear skies"),
        Condition::Clouds => (ThemeColor::Gray, "Cloudy conditions"),
        Condition::Rain => (ThemeColor::Blue, "Rainfall expected"),
        Condition::Snow => (ThemeColor::Cyan, "Snowfall expected"),
        Condition::Thunderstorm => (ThemeColor::Magenta, "Thunderstorms"),
        Condition::Drizzle => (ThemeColor::LightBlue, "Light rain"),
        Condition::Mist => (ThemeColor::Gray, "Misty conditions"),
        Condition::Unknown => (ThemeColor::Neutral, "Current conditions"),
    };
    ConditionTheme { color, description }
}

/// Everything the dashboard renders, precomputed into display form.
///
/// Recomputed from the snapshot on every render; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub temperature_c: i32,
    pub temp_min_c: i32,
    pub temp_max_c: i32,
    pub feels_like_c: i32,

    pub humidity_pct: u8,

    pub wind_speed_mps: f64,
    pub wind_deg: f64,
    pub wind_gust_mps: Option<f64>,
    pub wind_direction: &'static str,

    /// Kilometres with one decimal, e.g. "10.0"
    pub visibility_km: String,
    pub pressure_hpa: u32,

    /// Time-of-day at the station, e.g. "14:03:27"
    pub local_time: String,
    pub sunrise: String,
    pub sunset: String,
    /// Observation date and time at the station
    pub observed: String,
    /// e.g. "UTC+1", "UTC+5:30", "UTC-3:30"
    pub utc_offset: String,

    pub latitude: f64,
    pub longitude: f64,

    pub condition: Condition,
    pub theme: ConditionTheme,
    pub description: String,
}

impl DerivedMetrics {
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        let offset = snapshot.utc_offset_secs;
        Self {
            temperature_c: snapshot.temp_c.round() as i32,
            temp_min_c: snapshot.temp_min_c.round() as i32,
            temp_max_c: snapshot.temp_max_c.round() as i32,
            feels_like_c: snapshot.feels_like_c.round() as i32,
            humidity_pct: snapshot.humidity_pct,
            wind_speed_mps: snapshot.wind_speed_mps,
            wind_deg: snapshot.wind_deg,
            wind_gust_mps: snapshot.wind_gust_mps,
            wind_direction: compass_point(snapshot.wind_deg),
            visibility_km: format!("{:.1}", f64::from(snapshot.visibility_m) / 1000.0),
            pressure_hpa: snapshot.pressure_hpa,
            local_time: format_station_time(snapshot.observed_at, offset),
            sunrise: format_station_time(snapshot.sunrise_at, offset),
            sunset: format_station_time(snapshot.sunset_at, offset),
            observed: format_station_datetime(snapshot.observed_at, offset),
            utc_offset: format_utc_offset(offset),
            latitude: snapshot.latitude,
            longitude: snapshot.longitude,
            condition: snapshot.condition,
            theme: condition_theme(snapshot.condition),
            description: snapshot.description.clone(),
        }
    }
}

/// Render a UTC epoch as time-of-day at the station's offset.
fn format_station_time(epoch: i64, offset_secs: i32) -> String {
    DateTime::from_timestamp(epoch + i64::from(offset_secs), 0)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

/// Render a UTC epoch as date and time at the station's offset.
fn format_station_datetime(epoch: i64, offset_secs: i32) -> String {
    DateTime::from_timestamp(epoch + i64::from(offset_secs), 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "----".to_string())
}

/// Render an offset in seconds as "UTC+H" or "UTC+H:MM".
fn format_utc_offset(secs: i32) -> String {
    let sign = if secs < 0 { '-' } else { '+' };
    let total_minutes = secs.abs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}
