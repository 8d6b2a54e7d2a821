//! Plain-text rendering of a completed lookup

use crate::codes;
use crate::models::DailyForecast;
use chrono::NaiveDate;

/// Format an ISO date as dd/mm; dates that fail to parse pass through as-is
fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d/%m").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Format one forecast day as a table row
fn format_day(day: &DailyForecast) -> String {
    format!(
        "{:<6} {:<17} {:<28} {:>5.1}°C to {:>5.1}°C   {:>5.1} km/h",
        format_date(&day.date),
        codes::icon_for(day.weather_code),
        codes::describe(day.weather_code),
        day.temp_min_c,
        day.temp_max_c,
        day.wind_speed_kph
    )
}

/// Render the forecast table for a resolved location
#[must_use]
pub fn render_forecast(location_name: &str, days: &[DailyForecast]) -> String {
    let mut out = String::new();
    if !location_name.is_empty() {
        out.push_str(location_name);
        out.push('\n');
    }
    for day in days {
        out.push_str(&format_day(day));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, code: i32) -> DailyForecast {
        DailyForecast {
            date: date.to_string(),
            weather_code: code,
            wind_speed_kph: 14.2,
            temp_min_c: 3.5,
            temp_max_c: 11.0,
        }
    }

    #[test]
    fn test_format_date_day_month() {
        assert_eq!(format_date("2026-02-24"), "24/02");
    }

    #[test]
    fn test_format_date_passthrough_on_parse_failure() {
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_render_includes_name_and_one_line_per_day() {
        let days = vec![day("2026-02-24", 0), day("2026-02-25", 61)];
        let table = render_forecast("Greater London, England", &days);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Greater London, England");
        assert!(lines[1].contains("Clear sky"));
        assert!(lines[1].contains("wi-day-sunny"));
        assert!(lines[2].contains("Slight rain"));
    }

    #[test]
    fn test_render_without_location_name() {
        let table = render_forecast("", &[day("2026-02-24", 3)]);
        assert_eq!(table.lines().count(), 1);
    }
}
