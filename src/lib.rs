//! Weather Checker - location search and multi-day forecast summary
//!
//! A thin client over the OpenMeteo APIs: resolves a free-text location
//! name to coordinates, fetches a daily forecast for them, and renders a
//! simple per-day table.

pub mod api;
pub mod codes;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod render;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use config::WeatherCheckerConfig;
pub use error::WeatherCheckerError;
pub use lookup::{LookupState, WeatherLookup};
pub use models::{DailyForecast, LocationCandidate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherCheckerError>;
