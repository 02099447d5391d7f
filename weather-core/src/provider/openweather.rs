use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{CityIdentifier, WeatherReading, config::ProviderSettings, error::FetchError};

use super::WeatherProvider;

/// Current-weather lookups against an OpenWeather-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    settings: ProviderSettings,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            settings,
            http: Client::new(),
        }
    }

    #[instrument(skip_all, fields(city = %city))]
    async fn fetch_current(&self, city: &CityIdentifier) -> Result<WeatherReading, FetchError> {
        let res = self
            .http
            .get(self.settings.base_url.as_str())
            .query(&[
                ("q", city.as_str()),
                ("appid", self.settings.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                let e = e.without_url();
                warn!(error = %e, "weather request failed to send");
                FetchError::transport(e)
            })?;

        let status = res.status();
        debug!(%status, "weather response received");

        if !status.is_success() {
            // Unknown city and a rejected API key both end up here.
            let body = res.text().await.unwrap_or_default();
            debug!(%status, body = %truncate_body(&body), "weather request rejected");
            return Err(FetchError::NotFound { status: status.as_u16() });
        }

        let body = res.text().await.map_err(|e| FetchError::transport(e.without_url()))?;

        parse_current(&body)
    }
}

/// Turn a success body into a reading.
///
/// Bytes that are not JSON at all count as a transport failure; JSON that is
/// missing any consumed key path is a malformed response.
pub fn parse_current(body: &str) -> Result<WeatherReading, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(FetchError::transport)?;

    let parsed: OwCurrentResponse = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, body = %truncate_body(body), "unexpected weather response shape");
        FetchError::MalformedResponse(e.to_string())
    })?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| FetchError::MalformedResponse("empty `weather` array".to_string()))?;

    Ok(WeatherReading {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        description,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, city: &CityIdentifier) -> Result<WeatherReading, FetchError> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
