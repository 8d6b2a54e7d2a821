//! Error types and handling for the weather checker

use thiserror::Error;

/// Main error type for the weather checker
#[derive(Error, Debug)]
pub enum WeatherCheckerError {
    /// The submitted location query was empty or whitespace-only
    #[error("Empty location input")]
    EmptyInput,

    /// The geocoding service returned no candidates for the query
    #[error("No geocoding results for '{query}'")]
    NoResults { query: String },

    /// API communication errors: network failure, non-success HTTP status,
    /// or a response missing the fields we depend on
    #[error("API error: {message}")]
    Api { message: String },
}

impl WeatherCheckerError {
    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new no-results error
    pub fn no_results<S: Into<String>>(query: S) -> Self {
        Self::NoResults {
            query: query.into(),
        }
    }

    /// Get the user-facing error message.
    ///
    /// These strings are the entire error surface shown to the user;
    /// details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherCheckerError::EmptyInput => "Please input a location.",
            WeatherCheckerError::NoResults { .. } => "No results found for that location.",
            WeatherCheckerError::Api { .. } => "An unexpected error occurred. Please try again.",
        }
    }
}

impl From<reqwest::Error> for WeatherCheckerError {
    fn from(source: reqwest::Error) -> Self {
        Self::Api {
            message: source.to_string(),
        }
    }
}
