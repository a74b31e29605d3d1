//! Human-friendly rendering of observations and the session store.
//! Presentation only: consumes the core's read-only surface and never
//! mutates it.

use chrono::Local;
use wxboard_core::{Observation, ObservationStore, compare};

/// Emoji for a provider condition category. Unrecognized categories get
/// the generic sun-behind-cloud icon.
pub fn weather_icon(main_condition: &str) -> &'static str {
    match main_condition.to_lowercase().as_str() {
        "clear" => "☀️",
        "clouds" => "☁️",
        "rain" | "drizzle" => "🌧️",
        "thunderstorm" => "⛈️",
        "snow" => "❄️",
        "mist" | "fog" => "🌫️",
        _ => "🌤️",
    }
}

/// One-line form: icon, location, temperature, description, humidity, wind.
pub fn summary_line(obs: &Observation) -> String {
    format!(
        "{} {} | {} | {} | Humidity: {}% | Wind: {:.1} mph",
        weather_icon(&obs.main_condition),
        obs.location(),
        obs.formatted_temperature(),
        obs.description,
        obs.humidity_pct,
        obs.wind_speed_mph
    )
}

/// Per-city block used by `show` and the dashboard listing.
pub fn render_observation(obs: &Observation) -> String {
    let mut block = String::new();
    block.push_str(&format!("City: {}, {}\n", obs.city_name, obs.country));
    block.push_str(&format!(
        "Temperature: {} (Feels like {:.1}°F)\n",
        obs.formatted_temperature(),
        obs.feels_like_f
    ));
    block.push_str(&format!(
        "Conditions: {} {}\n",
        weather_icon(&obs.main_condition),
        obs.description
    ));
    block.push_str(&format!("Humidity: {}%\n", obs.humidity_pct));
    block.push_str(&format!("Wind Speed: {:.1} mph\n", obs.wind_speed_mph));
    block.push_str(&format!(
        "Fetched: {}\n",
        obs.fetched_at.with_timezone(&Local).format("%H:%M:%S")
    ));
    block
}

/// Full session listing: every city block, plus the quick
/// warmest/coldest/average footer once two or more cities are present.
pub fn render_store(store: &ObservationStore) -> String {
    if store.is_empty() {
        return "No cities yet. Use \"Add city\" to fetch one.\n".to_string();
    }

    let rule = "=".repeat(60);
    let mut out = String::new();
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!(
        "            WEATHER DATA FOR {} CITIES\n",
        store.len()
    ));
    out.push_str(&format!("{rule}\n\n"));

    for obs in store.iter() {
        out.push_str(&render_observation(obs));
        out.push_str(&format!("{}\n\n", "-".repeat(60)));
    }

    if store.len() >= 2 {
        out.push_str(&format!("{rule}\n"));
        out.push_str("            SIMPLE COMPARISON\n");
        out.push_str(&format!("{rule}\n\n"));

        if let Some(warmest) = compare::find_warmest(store) {
            out.push_str(&format!(
                "Warmest: {} at {}\n",
                warmest.location(),
                warmest.formatted_temperature()
            ));
        }
        if let Some(coldest) = compare::find_coldest(store) {
            out.push_str(&format!(
                "Coldest: {} at {}\n",
                coldest.location(),
                coldest.formatted_temperature()
            ));
        }
        out.push_str(&format!(
            "Average Temperature: {:.1}°F\n",
            compare::average_temperature(store)
        ));
    }

    out
}
