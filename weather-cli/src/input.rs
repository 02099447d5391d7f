//! Front-ends that produce the city to look up.

use anyhow::Result;
use inquire::{InquireError, Select};
use weather_core::CITIES;

/// Anything that can hand the core a city string. Validation happens in the
/// core, so an empty answer is passed through unchanged.
pub trait CityInput {
    fn city(&self) -> Result<String>;
}

/// City typed on the command line.
#[derive(Debug)]
pub struct FreeText(pub String);

impl CityInput for FreeText {
    fn city(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Fixed-choice picker over the built-in list.
#[derive(Debug, Default)]
pub struct CityPicker;

impl CityInput for CityPicker {
    fn city(&self) -> Result<String> {
        let choice = Select::new("Select a city:", CITIES.to_vec())
            .with_page_size(10)
            .prompt();

        match choice {
            Ok(city) => Ok(city.to_string()),
            // Escaping the picker leaves nothing selected.
            Err(InquireError::OperationCanceled) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_is_passed_through_untrimmed() {
        let input = FreeText("  London,GB ".into());
        assert_eq!(input.city().unwrap(), "  London,GB ");
    }
}
