//! Render state for the widget: what is held after each fetch, and which
//! fetch results are still allowed to land.

use tracing::debug;

use crate::{
    city::CityIdentifier,
    error::FetchError,
    model::WeatherReading,
    render::{View, render_reading},
    units::TemperatureUnit,
};

/// Exactly one of these holds at any time, so a reading and an error can
/// never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Success(WeatherReading),
    Error(FetchError),
}

/// Issued by [`WidgetState::begin_fetch`] and handed back with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub city: CityIdentifier,
}

#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    status: Status,
    unit: TemperatureUnit,
    latest: u64,
    settled: u64,
}

impl WidgetState {
    pub fn new(unit: TemperatureUnit) -> Self {
        Self { unit, ..Self::default() }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        match &self.status {
            Status::Success(reading) => Some(reading),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            Status::Error(err) => Some(err),
            _ => None,
        }
    }

    /// True while the most recent accepted request has not settled.
    pub fn is_pending(&self) -> bool {
        self.latest != self.settled
    }

    /// Validate the input and open a new request generation.
    ///
    /// Blank input fails right away with [`FetchError::MissingSelection`] and
    /// returns `None`; no request must be sent in that case. Otherwise a held
    /// error is cleared, a held reading stays visible until the result lands.
    pub fn begin_fetch(&mut self, input: &str) -> Option<FetchTicket> {
        let city = match CityIdentifier::parse(input) {
            Ok(city) => city,
            Err(err) => {
                self.status = Status::Error(err);
                // nothing in flight can overwrite this anymore
                self.latest += 1;
                self.settled = self.latest;
                return None;
            }
        };

        if matches!(self.status, Status::Error(_)) {
            self.status = Status::Idle;
        }

        self.latest += 1;
        debug!(generation = self.latest, city = %city, "fetch started");

        Some(FetchTicket { generation: self.latest, city })
    }

    /// Apply a fetch result. Returns `false` if a newer request has been
    /// started since this ticket was issued; the result is then dropped.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<WeatherReading, FetchError>,
    ) -> bool {
        if ticket.generation != self.latest {
            debug!(
                generation = ticket.generation,
                latest = self.latest,
                city = %ticket.city,
                "discarding stale fetch result"
            );
            return false;
        }

        self.settled = ticket.generation;
        self.status = match result {
            Ok(reading) => Status::Success(reading),
            Err(err) => Status::Error(err),
        };
        true
    }

    /// Flip the display unit. Never touches the held reading.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggle();
    }

    pub fn view(&self) -> View {
        match &self.status {
            Status::Idle => View::Empty,
            Status::Error(err) => View::Error(err.to_string()),
            Status::Success(reading) => View::Reading(render_reading(reading, self.unit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(name: &str, temp: f64) -> WeatherReading {
        WeatherReading {
            location_name: name.into(),
            temperature_c: temp,
            feels_like_c: temp - 1.0,
            humidity_pct: 50,
            wind_speed_mps: 2.0,
            description: "clear sky".into(),
        }
    }

    #[test]
    fn starts_idle_with_empty_view() {
        let state = WidgetState::default();
        assert_eq!(state.status(), &Status::Idle);
        assert_eq!(state.view(), View::Empty);
        assert!(!state.is_pending());
        assert!(state.unit().is_celsius());
    }

    #[test]
    fn blank_input_sets_missing_selection_without_ticket() {
        let mut state = WidgetState::default();
        assert!(state.begin_fetch("  ").is_none());
        assert_eq!(state.error(), Some(&FetchError::MissingSelection));
        assert!(!state.is_pending());
    }

    #[test]
    fn success_then_failure_clears_reading() {
        let mut state = WidgetState::default();

        let ticket = state.begin_fetch("London,GB").unwrap();
        assert!(state.is_pending());
        assert!(state.complete(&ticket, Ok(reading("London", 15.0))));
        assert_eq!(state.reading().map(|r| r.location_name.as_str()), Some("London"));

        let ticket = state.begin_fetch("Atlantis").unwrap();
        // reading stays visible while the next request is outstanding
        assert!(state.reading().is_some());
        assert!(state.complete(&ticket, Err(FetchError::NotFound { status: 404 })));
        assert!(state.reading().is_none());
        assert_eq!(state.view(), View::Error("City not found".into()));
    }

    #[test]
    fn new_fetch_clears_error_optimistically() {
        let mut state = WidgetState::default();
        let ticket = state.begin_fetch("Atlantis").unwrap();
        state.complete(&ticket, Err(FetchError::NotFound { status: 404 }));
        assert!(state.error().is_some());

        state.begin_fetch("Paris,FR").unwrap();
        assert_eq!(state.status(), &Status::Idle);
        assert!(state.is_pending());
    }

    #[test]
    fn new_success_replaces_reading_wholesale() {
        let mut state = WidgetState::default();
        let first = state.begin_fetch("London,GB").unwrap();
        state.complete(&first, Ok(reading("London", 15.0)));
        let second = state.begin_fetch("Tokyo,JP").unwrap();
        state.complete(&second, Ok(reading("Tokyo", 22.0)));

        assert_eq!(state.reading(), Some(&reading("Tokyo", 22.0)));
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = WidgetState::default();
        let slow = state.begin_fetch("London,GB").unwrap();
        let fast = state.begin_fetch("Paris,FR").unwrap();

        assert!(state.complete(&fast, Ok(reading("Paris", 18.0))));
        assert!(!state.complete(&slow, Ok(reading("London", 15.0))));

        assert_eq!(state.reading().map(|r| r.location_name.as_str()), Some("Paris"));
        assert!(!state.is_pending());
    }

    #[test]
    fn older_result_cannot_settle_newer_request() {
        let mut state = WidgetState::default();
        let slow = state.begin_fetch("London,GB").unwrap();
        let _fast = state.begin_fetch("Paris,FR").unwrap();

        assert!(!state.complete(&slow, Ok(reading("London", 15.0))));
        assert!(state.is_pending());
        assert_eq!(state.status(), &Status::Idle);
    }

    #[test]
    fn missing_selection_invalidates_outstanding_request() {
        let mut state = WidgetState::default();
        let outstanding = state.begin_fetch("London,GB").unwrap();
        assert!(state.begin_fetch("").is_none());

        assert!(!state.complete(&outstanding, Ok(reading("London", 15.0))));
        assert_eq!(state.error(), Some(&FetchError::MissingSelection));
    }

    #[test]
    fn toggling_twice_restores_rendered_lines() {
        let mut state = WidgetState::default();
        let ticket = state.begin_fetch("London,GB").unwrap();
        state.complete(&ticket, Ok(reading("London", 15.3)));
        let before = state.view();
        let held = state.reading().cloned();

        state.toggle_unit();
        assert_ne!(state.view(), before);
        assert_eq!(state.reading().cloned(), held);

        state.toggle_unit();
        assert_eq!(state.view(), before);
    }

    #[test]
    fn toggle_in_error_only_flips_unit() {
        let mut state = WidgetState::default();
        state.begin_fetch("");
        state.toggle_unit();

        assert_eq!(state.unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(state.view(), View::Error("Please select a city".into()));
    }
}
