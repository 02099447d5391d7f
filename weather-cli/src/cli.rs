use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_core::{
    CITIES, Config, Session, Status, TemperatureUnit, WeatherProvider, WidgetState,
    config::DEFAULT_BASE_URL, provider_from_config,
};

use crate::input::{CityInput, CityPicker, FreeText};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key (and optionally a custom endpoint).
    Configure,

    /// Show weather for a typed city, e.g. "London,GB".
    Show {
        /// City name, optionally followed by ",<country code>".
        city: Option<String>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Pick a city from the built-in list and show its weather.
    Pick {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// List the built-in cities.
    Cities,

    /// Type cities line by line; `:u` toggles units, `:q` quits.
    Interactive {
        /// Start in Fahrenheit.
        #[arg(long, short = 'f')]
        fahrenheit: bool,
    },
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Display temperatures in Fahrenheit.
    #[arg(long, short = 'f')]
    pub fahrenheit: bool,

    /// Print the reading as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl DisplayArgs {
    fn unit(&self) -> TemperatureUnit {
        unit_from_flag(self.fahrenheit)
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, display } => {
                lookup(&FreeText(city.unwrap_or_default()), &display).await
            }
            Command::Pick { display } => lookup(&CityPicker, &display).await,
            Command::Cities => {
                for city in CITIES {
                    println!("{city}");
                }
                Ok(())
            }
            Command::Interactive { fahrenheit } => {
                let session = Session::new(build_provider()?, unit_from_flag(fahrenheit));
                crate::interactive::run(session).await
            }
        }
    }
}

fn unit_from_flag(fahrenheit: bool) -> TemperatureUnit {
    if fahrenheit { TemperatureUnit::Fahrenheit } else { TemperatureUnit::Celsius }
}

/// Configuration is read once here and handed to the provider; nothing
/// downstream looks at the environment again.
fn build_provider() -> Result<Arc<dyn WeatherProvider>> {
    let path = Config::config_file_path()?;
    let config = Config::load_from(&path)?.with_env_overrides();
    debug!(path = %path.display(), "configuration loaded");
    Ok(Arc::from(provider_from_config(&config)))
}

async fn lookup(input: &dyn CityInput, display: &DisplayArgs) -> Result<()> {
    let mut session = Session::new(build_provider()?, display.unit());
    let city = input.city()?;
    let state = session.fetch(&city).await;

    if display.json {
        println!("{}", to_json(state)?);
    } else {
        for line in state.view().lines() {
            println!("{line}");
        }
    }

    Ok(())
}

fn to_json(state: &WidgetState) -> Result<String> {
    let value = match state.status() {
        Status::Success(reading) => serde_json::json!({
            "unit": state.unit(),
            "reading": reading,
        }),
        Status::Error(err) => serde_json::json!({ "error": err.to_string() }),
        Status::Idle => serde_json::Value::Null,
    };

    serde_json::to_string_pretty(&value).context("Failed to serialize reading to JSON")
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key.trim().to_string());

    let current = config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = Text::new("Weather endpoint:").with_default(&current).prompt()?;
    let base_url = (base_url.trim() != DEFAULT_BASE_URL).then_some(base_url);
    config.set_base_url(base_url);

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::WeatherReading;

    #[test]
    fn show_accepts_missing_city() {
        let cli = Cli::try_parse_from(["weather", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show { city: None, .. }));
    }

    #[test]
    fn show_parses_display_flags() {
        let cli = Cli::try_parse_from(["weather", "show", "London,GB", "-f", "--json"]).unwrap();
        match cli.command {
            Command::Show { city, display } => {
                assert_eq!(city.as_deref(), Some("London,GB"));
                assert_eq!(display.unit(), TemperatureUnit::Fahrenheit);
                assert!(display.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn pick_defaults_to_celsius_text() {
        let cli = Cli::try_parse_from(["weather", "pick"]).unwrap();
        match cli.command {
            Command::Pick { display } => {
                assert_eq!(display.unit(), TemperatureUnit::Celsius);
                assert!(!display.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn json_for_error_carries_message() {
        let mut state = WidgetState::default();
        state.begin_fetch("");
        let json = to_json(&state).unwrap();
        assert!(json.contains("Please select a city"));
    }

    #[test]
    fn json_for_reading_keeps_celsius_values() {
        let mut state = WidgetState::new(TemperatureUnit::Fahrenheit);
        let ticket = state.begin_fetch("London,GB").unwrap();
        state.complete(
            &ticket,
            Ok(WeatherReading {
                location_name: "London".into(),
                temperature_c: 15.0,
                feels_like_c: 14.2,
                humidity_pct: 70,
                wind_speed_mps: 3.5,
                description: "cloudy".into(),
            }),
        );

        let value: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
        assert_eq!(value["unit"], "fahrenheit");
        assert_eq!(value["reading"]["temperature_c"], 15.0);
    }
}
