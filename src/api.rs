//! HTTP client for the OpenMeteo geocoding and forecast APIs
//!
//! Both endpoints are key-free GET APIs. Errors are terminal for the
//! current lookup: there is no retry, every failure surfaces as one of the
//! [`WeatherCheckerError`] kinds.

use crate::config::WeatherCheckerConfig;
use crate::models::{DailyForecast, LocationCandidate, openmeteo};
use crate::WeatherCheckerError;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// HTTP client for the geocoding and forecast services
pub struct WeatherApiClient {
    /// Shared HTTP client with a bounded per-request timeout
    client: Client,
    /// Endpoint and request configuration
    config: WeatherCheckerConfig,
}

impl WeatherApiClient {
    /// Create a new API client from the given configuration
    pub fn new(config: WeatherCheckerConfig) -> Result<Self, WeatherCheckerError> {
        config.validate()?;

        let timeout = Duration::from_secs(config.timeout_seconds.into());
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weather-checker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherCheckerError::api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Resolve a location name to its best geocoding candidate.
    ///
    /// Requests exactly one English-language result and takes the first
    /// element of the result list; there is no disambiguation beyond the
    /// upstream ranking.
    #[instrument(skip(self), fields(location = location_name))]
    pub async fn geocode(
        &self,
        location_name: &str,
    ) -> Result<LocationCandidate, WeatherCheckerError> {
        info!("Geocoding location: '{}'", location_name);

        let url = format!(
            "{}/v1/search?name={}&count=1&language=en&format=json",
            self.config.geocoding_base_url,
            urlencoding::encode(location_name)
        );
        debug!("Geocoding request URL: {}", url);

        let response = self.make_request(&url).await?;

        let geocoding_response: openmeteo::GeocodingResponse =
            response.json().await.map_err(|e| {
                error!("Failed to parse geocoding response: {}", e);
                WeatherCheckerError::api("Invalid geocoding data received from OpenMeteo API")
            })?;

        let Some(first) = geocoding_response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
        else {
            warn!("No results found for location '{}'", location_name);
            return Err(WeatherCheckerError::no_results(location_name));
        };

        let candidate = LocationCandidate::from(first);
        info!(
            "Resolved '{}' to ({:.4}, {:.4}) in timezone {}",
            location_name, candidate.latitude, candidate.longitude, candidate.timezone
        );
        Ok(candidate)
    }

    /// Fetch the daily forecast for a resolved location.
    ///
    /// The response delivers five parallel arrays; they are reshaped
    /// index-wise into exactly `days` row records, with index 0 as the
    /// current day. A missing `daily` block, or any array shorter than
    /// `days`, is an API error rather than a partial result.
    #[instrument(skip(self, candidate), fields(lat = candidate.latitude, lon = candidate.longitude))]
    pub async fn daily_forecast(
        &self,
        candidate: &LocationCandidate,
        days: u8,
    ) -> Result<Vec<DailyForecast>, WeatherCheckerError> {
        info!(
            "Fetching {}-day forecast for ({:.4}, {:.4})",
            days, candidate.latitude, candidate.longitude
        );

        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&timezone={}&daily=weather_code,temperature_2m_max,temperature_2m_min,wind_speed_10m_max&forecast_days={}",
            self.config.forecast_base_url,
            candidate.latitude,
            candidate.longitude,
            urlencoding::encode(&candidate.timezone),
            days
        );
        debug!("Forecast request URL: {}", url);

        let response = self.make_request(&url).await?;

        let forecast_response: openmeteo::ForecastResponse =
            response.json().await.map_err(|e| {
                error!("Failed to parse forecast response: {}", e);
                WeatherCheckerError::api("Invalid forecast data received from OpenMeteo API")
            })?;

        let Some(daily) = forecast_response.daily else {
            error!("Forecast response is missing the daily block");
            return Err(WeatherCheckerError::api(
                "No daily forecast data available from OpenMeteo",
            ));
        };

        if daily.min_len() < days as usize {
            error!(
                "Forecast arrays too short: got {} entries, need {}",
                daily.min_len(),
                days
            );
            return Err(WeatherCheckerError::api(
                "Incomplete daily forecast data received from OpenMeteo",
            ));
        }

        let rows = daily.into_rows(days as usize);
        info!("Retrieved forecast with {} daily records", rows.len());
        Ok(rows)
    }

    /// Issue a GET request and map non-success statuses to API errors
    async fn make_request(&self, url: &str) -> Result<Response, WeatherCheckerError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!("HTTP request failed: {}", e);
            WeatherCheckerError::from(e)
        })?;

        let status = response.status();
        debug!("HTTP response received: {}", status);

        if status.as_u16() == 401 {
            error!("API request unauthorized (HTTP 401)");
            return Err(WeatherCheckerError::api(
                "Unauthorized request to OpenMeteo API",
            ));
        }
        if !status.is_success() {
            error!("API request failed with status {}", status);
            return Err(WeatherCheckerError::api(format!(
                "OpenMeteo API returned HTTP {status}"
            )));
        }

        Ok(response)
    }
}
