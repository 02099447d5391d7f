use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Built-in choices for the selector front-end, `"City,CountryCode"`.
pub const CITIES: [&str; 20] = [
    "New York,US",
    "London,GB",
    "Paris,FR",
    "Tokyo,JP",
    "Sydney,AU",
    "Moscow,RU",
    "Berlin,DE",
    "Rome,IT",
    "Madrid,ES",
    "Beijing,CN",
    "Cairo,EG",
    "Rio de Janeiro,BR",
    "Mumbai,IN",
    "Toronto,CA",
    "Seoul,KR",
    "Amsterdam,NL",
    "Singapore,SG",
    "Stockholm,SE",
    "Dubai,AE",
    "Bangkok,TH",
];

/// A non-blank location query, e.g. `"London,GB"` or `"springfield"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityIdentifier(String);

impl CityIdentifier {
    /// Trim the input and reject it if nothing is left.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FetchError::MissingSelection);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the country code, or the whole query if there is none.
    pub fn name(&self) -> &str {
        match self.0.rsplit_once(',') {
            Some((name, _)) => name.trim(),
            None => &self.0,
        }
    }

    pub fn country_code(&self) -> Option<&str> {
        self.0
            .rsplit_once(',')
            .map(|(_, code)| code.trim())
            .filter(|code| !code.is_empty())
    }
}

impl fmt::Display for CityIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CityIdentifier {
    type Error = FetchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CityIdentifier> for String {
    fn from(value: CityIdentifier) -> Self {
        value.0
    }
}
