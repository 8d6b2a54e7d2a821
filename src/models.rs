//! Data models for location candidates, daily forecasts, and the OpenMeteo
//! API response shapes.
//!
//! The wire types mirror the upstream JSON with optional fields; absence is
//! validated at the API boundary and converted into the defined error kinds
//! rather than propagated inward.

use serde::{Deserialize, Serialize};

/// A single resolved location from the geocoding service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationCandidate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA timezone name for the location
    pub timezone: String,
    /// Largest administrative subdivision (e.g. state, region)
    pub admin1: Option<String>,
    /// Mid-level administrative subdivision
    pub admin2: Option<String>,
    /// Smallest administrative subdivision
    pub admin3: Option<String>,
    /// Country name
    pub country: Option<String>,
}

impl LocationCandidate {
    /// Derive the display name shown above the forecast table.
    ///
    /// Joins whichever of admin2, admin1, admin3, country are present, in
    /// that fixed order, with ", ". The field order comes from the upstream
    /// UI; the stray trailing separator it emitted is not reproduced.
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.admin2, &self.admin1, &self.admin3, &self.country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One day's weather summary in row form
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyForecast {
    /// Forecast date as reported by the API (ISO 8601, e.g. "2026-08-27")
    pub date: String,
    /// WMO weather code for the day
    pub weather_code: i32,
    /// Maximum wind speed in km/h
    pub wind_speed_kph: f64,
    /// Minimum temperature in Celsius
    pub temp_min_c: f64,
    /// Maximum temperature in Celsius
    pub temp_max_c: f64,
}

/// OpenMeteo API response structures
pub mod openmeteo {
    use serde::Deserialize;

    /// Geocoding search response
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        /// Matching locations, best match first; absent when nothing matched
        pub results: Option<Vec<GeocodingResult>>,
    }

    /// A single geocoding match
    #[derive(Debug, Deserialize, Clone)]
    pub struct GeocodingResult {
        pub latitude: f64,
        pub longitude: f64,
        pub timezone: String,
        pub admin1: Option<String>,
        pub admin2: Option<String>,
        pub admin3: Option<String>,
        pub country: Option<String>,
    }

    impl From<GeocodingResult> for super::LocationCandidate {
        fn from(result: GeocodingResult) -> Self {
            Self {
                latitude: result.latitude,
                longitude: result.longitude,
                timezone: result.timezone,
                admin1: result.admin1,
                admin2: result.admin2,
                admin3: result.admin3,
                country: result.country,
            }
        }
    }

    /// Daily forecast response
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: Option<DailyColumns>,
    }

    /// Column-oriented daily data: parallel arrays, one entry per day
    #[derive(Debug, Deserialize)]
    pub struct DailyColumns {
        pub time: Vec<String>,
        pub weather_code: Vec<i32>,
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Vec<f64>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Vec<f64>,
        #[serde(rename = "wind_speed_10m_max")]
        pub wind_speed_max: Vec<f64>,
    }

    impl DailyColumns {
        /// Length of the shortest parallel array
        #[must_use]
        pub fn min_len(&self) -> usize {
            self.time
                .len()
                .min(self.weather_code.len())
                .min(self.temperature_max.len())
                .min(self.temperature_min.len())
                .min(self.wind_speed_max.len())
        }

        /// Reshape the columns into `days` row records, index-wise from
        /// index 0 (the current day). Caller must check [`Self::min_len`]
        /// first; this truncates at `days`.
        #[must_use]
        pub fn into_rows(self, days: usize) -> Vec<super::DailyForecast> {
            (0..days.min(self.min_len()))
                .map(|i| super::DailyForecast {
                    date: self.time[i].clone(),
                    weather_code: self.weather_code[i],
                    wind_speed_kph: self.wind_speed_max[i],
                    temp_min_c: self.temperature_min[i],
                    temp_max_c: self.temperature_max[i],
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        admin1: Option<&str>,
        admin2: Option<&str>,
        admin3: Option<&str>,
        country: Option<&str>,
    ) -> LocationCandidate {
        LocationCandidate {
            latitude: 51.5,
            longitude: -0.12,
            timezone: "Europe/London".to_string(),
            admin1: admin1.map(String::from),
            admin2: admin2.map(String::from),
            admin3: admin3.map(String::from),
            country: country.map(String::from),
        }
    }

    #[test]
    fn test_display_name_all_fields() {
        let c = candidate(
            Some("England"),
            Some("Greater London"),
            Some("Westminster"),
            Some("United Kingdom"),
        );
        assert_eq!(
            c.display_name(),
            "Greater London, England, Westminster, United Kingdom"
        );
    }

    #[test]
    fn test_display_name_skips_absent_fields() {
        let c = candidate(Some("A"), None, None, Some("B"));
        assert_eq!(c.display_name(), "A, B");
    }

    #[test]
    fn test_display_name_empty_when_no_fields() {
        let c = candidate(None, None, None, None);
        assert_eq!(c.display_name(), "");
    }

    #[test]
    fn test_into_rows_interleaves_index_wise() {
        let columns = openmeteo::DailyColumns {
            time: vec!["d0".into(), "d1".into(), "d2".into()],
            weather_code: vec![0, 61, 95],
            temperature_max: vec![10.0, 11.0, 12.0],
            temperature_min: vec![1.0, 2.0, 3.0],
            wind_speed_max: vec![5.0, 6.0, 7.0],
        };
        let rows = columns.into_rows(3);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            DailyForecast {
                date: "d1".to_string(),
                weather_code: 61,
                wind_speed_kph: 6.0,
                temp_min_c: 2.0,
                temp_max_c: 11.0,
            }
        );
    }
}
