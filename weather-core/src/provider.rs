use crate::{
    CityIdentifier, Config, WeatherReading, error::FetchError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue one request for `city`. No retries, no caching.
    async fn get_weather(&self, city: &CityIdentifier) -> Result<WeatherReading, FetchError>;
}

/// Construct the provider from loaded configuration.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(config.provider_settings()))
}
