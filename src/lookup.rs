//! Lookup orchestration: geocode, then fetch and reshape the forecast
//!
//! A submission moves through `Pending -> {Success, Error}`. The state is
//! owned by [`WeatherLookup`] and only transitioned here; submissions are
//! serialized by `&mut self`, so at most one lookup is in flight and the
//! state slot is overwritten wholesale on each completed submission.

use crate::api::WeatherApiClient;
use crate::config::WeatherCheckerConfig;
use crate::models::DailyForecast;
use crate::WeatherCheckerError;
use tracing::{info, warn};

/// Outcome slot for the current submission.
///
/// The user-facing message lives only in the `Error` variant, and the
/// resolved records only in `Success`; there is no way to observe both.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    /// No completed submission yet, or one is in flight
    Pending,
    /// The last submission resolved a location and a full forecast
    Success {
        /// Display name derived from the candidate's admin areas
        location_name: String,
        /// One record per forecast day, day 0 first
        days: Vec<DailyForecast>,
    },
    /// The last submission failed; `message` is the user-facing text
    Error { message: String },
}

/// Orchestrates location search submissions against the weather APIs
pub struct WeatherLookup {
    api: WeatherApiClient,
    forecast_days: u8,
    state: LookupState,
}

impl WeatherLookup {
    /// Create a new lookup with the given configuration
    pub fn new(config: WeatherCheckerConfig) -> Result<Self, WeatherCheckerError> {
        let forecast_days = config.forecast_days;
        let api = WeatherApiClient::new(config)?;
        Ok(Self {
            api,
            forecast_days,
            state: LookupState::Pending,
        })
    }

    /// Current state of the most recent submission
    #[must_use]
    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Run one search submission to completion.
    ///
    /// Blank input fails without touching the network. Any client error,
    /// from either the geocoding or the forecast call, transitions to
    /// `Error`; a submission never leaves the state `Pending` on failure.
    pub async fn submit(&mut self, query: &str) -> &LookupState {
        self.state = LookupState::Pending;
        self.state = match self.run(query).await {
            Ok((location_name, days)) => {
                info!(
                    "Lookup succeeded: {} days for '{}'",
                    days.len(),
                    location_name
                );
                LookupState::Success {
                    location_name,
                    days,
                }
            }
            Err(e) => {
                warn!("Lookup failed: {}", e);
                LookupState::Error {
                    message: e.user_message().to_string(),
                }
            }
        };
        &self.state
    }

    async fn run(
        &self,
        query: &str,
    ) -> Result<(String, Vec<DailyForecast>), WeatherCheckerError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WeatherCheckerError::EmptyInput);
        }

        let candidate = self.api.geocode(query).await?;
        let days = self.api.daily_forecast(&candidate, self.forecast_days).await?;

        Ok((candidate.display_name(), days))
    }
}
