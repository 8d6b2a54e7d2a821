//! Configuration for the weather checker
//!
//! Endpoints and request settings, with defaults matching the public
//! OpenMeteo services. Base URLs are overridable so tests can point the
//! client at a local mock server.

use crate::WeatherCheckerError;
use serde::{Deserialize, Serialize};

/// Configuration for the weather checker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCheckerConfig {
    /// Base URL of the geocoding service
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL of the forecast service
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Number of forecast days to request; day 0 is the current day
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_forecast_days() -> u8 {
    5
}

impl Default for WeatherCheckerConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_seconds: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherCheckerConfig {
    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), WeatherCheckerError> {
        if self.geocoding_base_url.is_empty() || self.forecast_base_url.is_empty() {
            return Err(WeatherCheckerError::api("Base URL cannot be empty"));
        }
        if self.timeout_seconds == 0 {
            return Err(WeatherCheckerError::api("Timeout must be greater than 0"));
        }
        if self.forecast_days == 0 {
            return Err(WeatherCheckerError::api(
                "Forecast day count must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WeatherCheckerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.forecast_days, 5);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = WeatherCheckerConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let config = WeatherCheckerConfig {
            geocoding_base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
