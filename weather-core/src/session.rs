//! Async driver around [`WidgetState`].
//!
//! Each request runs as its own task and reports back over a channel, so a
//! caller can keep handling input while a lookup is outstanding. Results from
//! superseded requests are dropped by the state's generation check.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{
    error::FetchError,
    model::WeatherReading,
    provider::WeatherProvider,
    state::{FetchTicket, WidgetState},
    units::TemperatureUnit,
};

/// A finished request, sent from the fetch task back to the session.
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<WeatherReading, FetchError>,
}

#[derive(Debug)]
pub struct Session {
    state: WidgetState,
    provider: Arc<dyn WeatherProvider>,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl Session {
    pub fn new(provider: Arc<dyn WeatherProvider>, unit: TemperatureUnit) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state: WidgetState::new(unit), provider, tx, rx }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn toggle_unit(&mut self) {
        self.state.toggle_unit();
    }

    /// Start a lookup for `input` without waiting for it.
    ///
    /// Returns `false` when the input was rejected; the state then already
    /// holds the error and no request was sent. Must be called from within a
    /// Tokio runtime.
    pub fn request(&mut self, input: &str) -> bool {
        let Some(ticket) = self.state.begin_fetch(input) else {
            return false;
        };

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let city = ticket.city.clone();
            let fetch = tokio::spawn(async move { provider.get_weather(&city).await });

            // A fetch that dies must still settle its ticket, or waiters hang.
            let result = fetch.await.unwrap_or_else(|e| {
                warn!(city = %ticket.city, error = %e, "fetch task did not finish");
                Err(FetchError::transport(e))
            });

            // The receiver lives as long as the session; if it is gone nobody
            // is left to show the result.
            let _ = tx.send(FetchOutcome { ticket, result });
        });

        true
    }

    /// Wait for the next finished request and apply it.
    ///
    /// Returns whether the outcome changed the state (`false` for stale ones).
    pub async fn next_outcome(&mut self) -> bool {
        // `self.tx` keeps the channel open, so `recv` only yields `None` if
        // the session is being torn down.
        let Some(outcome) = self.rx.recv().await else {
            return false;
        };

        let applied = self.state.complete(&outcome.ticket, outcome.result);
        if applied {
            match self.state.error() {
                Some(err) => info!(city = %outcome.ticket.city, error = %err, "lookup failed"),
                None => info!(city = %outcome.ticket.city, "lookup succeeded"),
            }
        }
        applied
    }

    /// Wait until the latest request has settled. Returns at once if
    /// nothing is in flight.
    pub async fn settle(&mut self) -> &WidgetState {
        while self.state.is_pending() {
            self.next_outcome().await;
        }
        &self.state
    }

    /// Request a lookup and wait until nothing is pending.
    pub async fn fetch(&mut self, input: &str) -> &WidgetState {
        self.request(input);
        self.settle().await
    }
}
