use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weather observation for one city at one fetch moment.
///
/// Built exclusively by a provider from a successfully parsed response and
/// never mutated afterwards. The store owns these; everything downstream
/// works with shared references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub city_name: String,
    /// Two-letter country code as reported by the provider.
    pub country: String,
    pub temperature_f: f64,
    pub feels_like_f: f64,
    /// Free-form provider text, e.g. "clear sky".
    pub description: String,
    /// Provider category, e.g. "Clear", "Clouds", "Rain". Unrecognized
    /// values are legal; presentation maps them to a generic icon.
    pub main_condition: String,
    pub humidity_pct: u8,
    pub wind_speed_mph: f64,
    /// Captured once, when parsing of the response completed.
    pub fetched_at: DateTime<Utc>,
}

impl Observation {
    /// "City, CC" as used in every comparison report.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city_name, self.country)
    }

    pub fn fetched_at_millis(&self) -> i64 {
        self.fetched_at.timestamp_millis()
    }

    /// Temperature with one decimal and the degree suffix.
    pub fn formatted_temperature(&self) -> String {
        format!("{:.1}°F", self.temperature_f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Observation {
        Observation {
            city_name: "Paris".to_string(),
            country: "FR".to_string(),
            temperature_f: 72.5,
            feels_like_f: 70.1,
            description: "clear sky".to_string(),
            main_condition: "Clear".to_string(),
            humidity_pct: 55,
            wind_speed_mph: 8.2,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn location_joins_city_and_country() {
        assert_eq!(sample().location(), "Paris, FR");
    }

    #[test]
    fn formatted_temperature_has_one_decimal_and_suffix() {
        assert_eq!(sample().formatted_temperature(), "72.5°F");

        let mut obs = sample();
        obs.temperature_f = 60.0;
        assert_eq!(obs.formatted_temperature(), "60.0°F");
    }

    #[test]
    fn fetched_at_millis_matches_timestamp() {
        let obs = sample();
        assert_eq!(obs.fetched_at_millis(), obs.fetched_at.timestamp_millis());
    }
}
