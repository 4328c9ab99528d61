//! skycast-api - Weather provider client for Skycast
//!
//! This crate owns the boundary to the remote weather API: the
//! [`WeatherProvider`] trait seam and the reqwest-backed [`WeatherClient`]
//! that speaks to the OpenWeather current-weather endpoint.

pub mod client;
mod dto;
pub mod provider;

// Re-export primary types
pub use client::{WeatherClient, DEFAULT_ENDPOINT};
pub use provider::{LocalWeatherProvider, WeatherProvider};
