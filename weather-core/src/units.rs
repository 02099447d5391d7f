use serde::{Deserialize, Serialize};

/// Display unit for temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn is_celsius(self) -> bool {
        self == Self::Celsius
    }

    /// Suffix printed after the degree sign.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Label for the control that switches away from this unit.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Celsius => "Toggle to Fahrenheit",
            Self::Fahrenheit => "Toggle to Celsius",
        }
    }
}

/// Convert a stored Celsius value for display.
pub fn to_display(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Inverse of [`to_display`].
pub fn from_display(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}
