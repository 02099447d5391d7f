use serde::{Deserialize, Serialize};

/// One successful lookup. Temperatures are stored in Celsius as the API
/// returns them; display conversion never touches these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub description: String,
}
