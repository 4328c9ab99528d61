//! Wire types for the OpenWeather current-weather endpoint
//!
//! These mirror the nested JSON shape the API returns. Conversion into the
//! flat [`WeatherSnapshot`] guards the one structurally-optional piece (the
//! `weather` array) so a malformed body surfaces as a parse error instead
//! of a panic.

use serde::Deserialize;
use skycast_core::{Condition, Error, Result, WeatherSnapshot};

/// The provider omits `visibility` in rare cases; its documented maximum.
const DEFAULT_VISIBILITY_M: u32 = 10_000;

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherDto {
    name: String,
    dt: i64,
    timezone: i32,
    #[serde(default)]
    visibility: Option<u32>,
    coord: CoordDto,
    main: MainDto,
    weather: Vec<ConditionDto>,
    wind: WindDto,
    sys: SysDto,
}

#[derive(Debug, Deserialize)]
struct CoordDto {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WindDto {
    speed: f64,
    deg: f64,
    gust: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SysDto {
    #[serde(default)]
    country: Option<String>,
    sunrise: i64,
    sunset: i64,
}

impl CurrentWeatherDto {
    pub(crate) fn into_snapshot(self) -> Result<WeatherSnapshot> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| Error::parse("response contained no weather conditions"))?;

        Ok(WeatherSnapshot {
            city: self.name,
            country: self.sys.country.unwrap_or_default(),
            observed_at: self.dt,
            utc_offset_secs: self.timezone,
            temp_c: self.main.temp,
            temp_min_c: self.main.temp_min,
            temp_max_c: self.main.temp_max,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            visibility_m: self.visibility.unwrap_or(DEFAULT_VISIBILITY_M),
            wind_speed_mps: self.wind.speed,
            wind_deg: self.wind.deg,
            wind_gust_mps: self.wind.gust,
            sunrise_at: self.sys.sunrise,
            sunset_at: self.sys.sunset,
            latitude: self.coord.lat,
            longitude: self.coord.lon,
            condition: Condition::from_main(&condition.main),
            icon: condition.icon,
            description: condition.description,
        })
    }
}
