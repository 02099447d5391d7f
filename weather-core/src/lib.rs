//! Core library for the `weather` lookup widget.
//!
//! This crate defines:
//! - City identifiers and the built-in city list
//! - The weather fetcher (provider trait + OpenWeather implementation)
//! - Celsius/Fahrenheit display conversion
//! - The render state machine and an async session that drives it
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other front-ends.

pub mod city;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod session;
pub mod state;
pub mod units;

pub use city::{CITIES, CityIdentifier};
pub use config::{Config, ProviderSettings};
pub use error::FetchError;
pub use model::WeatherReading;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use render::View;
pub use session::Session;
pub use state::{FetchTicket, Status, WidgetState};
pub use units::TemperatureUnit;
