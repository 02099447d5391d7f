//! Text rendering of the results panel.

use crate::{
    model::WeatherReading,
    units::{TemperatureUnit, to_display},
};

/// What the results panel shows for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Empty,
    Error(String),
    Reading(Vec<String>),
}

impl View {
    pub fn lines(&self) -> Vec<String> {
        match self {
            View::Empty => Vec::new(),
            View::Error(message) => vec![message.clone()],
            View::Reading(lines) => lines.clone(),
        }
    }
}

/// Format a reading in the given unit. Only the two temperatures depend on it.
pub fn render_reading(reading: &WeatherReading, unit: TemperatureUnit) -> Vec<String> {
    vec![
        reading.location_name.clone(),
        format!("Temperature: {}", format_temperature(reading.temperature_c, unit)),
        format!("Feels like: {}", format_temperature(reading.feels_like_c, unit)),
        format!("Description: {}", reading.description),
        format!("Humidity: {}%", reading.humidity_pct),
        format!("Wind Speed: {} m/s", reading.wind_speed_mps + 0.0),
    ]
}

/// `15.0°C`, `59.0°F`.
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    // Round first so anything that lands on zero loses its sign; + 0.0 folds -0.0.
    let rounded = (to_display(celsius, unit) * 10.0).round() / 10.0 + 0.0;
    format!("{rounded:.1}°{}", unit.symbol())
}
