//! WMO weather code lookup table
//!
//! Maps the integer weather codes returned by the OpenMeteo daily forecast
//! to a human-readable description and a `weather-icons` identifier.
//! Both lookups are total: unknown codes fall back to "N/A" and an empty
//! icon id rather than failing.

/// Human-readable description for a WMO weather code
#[must_use]
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        97 => "Thunderstorm with heavy hail",
        _ => "N/A",
    }
}

/// Icon identifier for a WMO weather code.
///
/// Note the asymmetry with [`describe`]: code 99 has an icon here but no
/// description above. Kept as-is to match the upstream table.
#[must_use]
pub fn icon_for(code: i32) -> &'static str {
    match code {
        0 => "wi-day-sunny",
        1 | 2 => "wi-day-cloudy",
        3 => "wi-cloudy",
        45 | 48 => "wi-day-fog",
        51 | 53 | 55 | 56 | 57 => "wi-rain-mix",
        61 | 63 | 65 | 66 | 67 => "wi-rain",
        71 | 73 | 75 | 77 | 85 | 86 => "wi-snow",
        80 | 81 | 82 => "wi-showers",
        95 | 96 | 97 | 99 => "wi-thunderstorm",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_lookups_are_total_over_code_range() {
        for code in 0..=99 {
            // Must never panic, and fall back for unmapped codes
            let desc = describe(code);
            let icon = icon_for(code);
            assert!(!desc.is_empty());
            if desc == "N/A" && code != 99 {
                assert_eq!(icon, "");
            }
        }
    }

    #[rstest]
    #[case(0, "Clear sky", "wi-day-sunny")]
    #[case(1, "Mainly clear", "wi-day-cloudy")]
    #[case(2, "Partly cloudy", "wi-day-cloudy")]
    #[case(3, "Overcast", "wi-cloudy")]
    #[case(45, "Fog", "wi-day-fog")]
    #[case(48, "Depositing rime fog", "wi-day-fog")]
    #[case(55, "Dense drizzle", "wi-rain-mix")]
    #[case(57, "Dense freezing drizzle", "wi-rain-mix")]
    #[case(61, "Slight rain", "wi-rain")]
    #[case(67, "Heavy freezing rain", "wi-rain")]
    #[case(77, "Snow grains", "wi-snow")]
    #[case(86, "Heavy snow showers", "wi-snow")]
    #[case(82, "Violent rain showers", "wi-showers")]
    #[case(95, "Thunderstorm", "wi-thunderstorm")]
    #[case(97, "Thunderstorm with heavy hail", "wi-thunderstorm")]
    fn test_known_codes(#[case] code: i32, #[case] desc: &str, #[case] icon: &str) {
        assert_eq!(describe(code), desc);
        assert_eq!(icon_for(code), icon);
    }

    #[test]
    fn test_code_99_has_icon_but_no_description() {
        assert_eq!(describe(99), "N/A");
        assert_eq!(icon_for(99), "wi-thunderstorm");
    }

    #[rstest]
    #[case(4)]
    #[case(42)]
    #[case(100)]
    #[case(-1)]
    fn test_unmapped_codes_fall_back(#[case] code: i32) {
        assert_eq!(describe(code), "N/A");
        assert_eq!(icon_for(code), "");
    }
}
