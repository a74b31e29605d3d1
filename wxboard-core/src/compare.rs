//! Cross-city comparison and summary statistics.
//!
//! Every function here is a pure computation over records or a store
//! snapshot. Empty input is never an error: extrema return `None`, the
//! average defaults to `0.0`, and the summary falls back to a fixed
//! message.

use crate::{model::Observation, store::ObservationStore};

/// Fixed report for an empty store; extrema are not consulted in that case.
pub const NO_DATA_MESSAGE: &str = "No weather data available for statistics.";

/// Temperature delta between two locations. An exactly-zero difference
/// yields an equality report, never a warmer/cooler one.
pub fn compare_temperature(a: &Observation, b: &Observation) -> String {
    let diff = a.temperature_f - b.temperature_f;

    if diff == 0.0 {
        return format!(
            "{} and {} have the same temperature ({:.1}°F)",
            a.location(),
            b.location(),
            a.temperature_f
        );
    }

    let (warmer, cooler) = if diff > 0.0 { (a, b) } else { (b, a) };
    format!(
        "{} is {:.1}°F warmer than {}",
        warmer.location(),
        diff.abs(),
        cooler.location()
    )
}

pub fn compare_humidity(a: &Observation, b: &Observation) -> String {
    let diff = i32::from(a.humidity_pct) - i32::from(b.humidity_pct);

    if diff == 0 {
        return format!(
            "{} and {} have the same humidity ({}%)",
            a.location(),
            b.location(),
            a.humidity_pct
        );
    }

    let (more, less) = if diff > 0 { (a, b) } else { (b, a) };
    format!(
        "{} is {}% more humid than {}",
        more.location(),
        diff.abs(),
        less.location()
    )
}

pub fn compare_wind_speed(a: &Observation, b: &Observation) -> String {
    let diff = a.wind_speed_mph - b.wind_speed_mph;

    if diff == 0.0 {
        return format!(
            "{} and {} have the same wind speed ({:.1} mph)",
            a.location(),
            b.location(),
            a.wind_speed_mph
        );
    }

    let (windier, calmer) = if diff > 0.0 { (a, b) } else { (b, a) };
    format!(
        "{} is {:.1} mph windier than {}",
        windier.location(),
        diff.abs(),
        calmer.location()
    )
}

/// Structured two-city report: location headers, the three pairwise
/// comparisons with per-location values, then the condition/description
/// pairs.
pub fn full_comparison(a: &Observation, b: &Observation) -> String {
    let mut report = String::new();

    report.push_str("=== Weather Comparison ===\n\n");
    report.push_str(&format!("Location 1: {}\n", a.location()));
    report.push_str(&format!("Location 2: {}\n\n", b.location()));

    report.push_str("Temperature:\n");
    report.push_str(&format!("  {}: {:.1}°F\n", a.location(), a.temperature_f));
    report.push_str(&format!("  {}: {:.1}°F\n", b.location(), b.temperature_f));
    report.push_str(&format!("  → {}\n\n", compare_temperature(a, b)));

    report.push_str("Humidity:\n");
    report.push_str(&format!("  {}: {}%\n", a.location(), a.humidity_pct));
    report.push_str(&format!("  {}: {}%\n", b.location(), b.humidity_pct));
    report.push_str(&format!("  → {}\n\n", compare_humidity(a, b)));

    report.push_str("Wind Speed:\n");
    report.push_str(&format!("  {}: {:.1} mph\n", a.location(), a.wind_speed_mph));
    report.push_str(&format!("  {}: {:.1} mph\n", b.location(), b.wind_speed_mph));
    report.push_str(&format!("  → {}\n\n", compare_wind_speed(a, b)));

    report.push_str("Conditions:\n");
    report.push_str(&format!(
        "  {}: {} ({})\n",
        a.location(),
        a.description,
        a.main_condition
    ));
    report.push_str(&format!(
        "  {}: {} ({})\n",
        b.location(),
        b.description,
        b.main_condition
    ));

    report
}

/// Warmest record in insertion order; ties resolve to the earliest.
pub fn find_warmest(store: &ObservationStore) -> Option<&Observation> {
    store
        .iter()
        .reduce(|best, cur| if cur.temperature_f > best.temperature_f { cur } else { best })
}

pub fn find_coldest(store: &ObservationStore) -> Option<&Observation> {
    store
        .iter()
        .reduce(|best, cur| if cur.temperature_f < best.temperature_f { cur } else { best })
}

pub fn find_most_humid(store: &ObservationStore) -> Option<&Observation> {
    store
        .iter()
        .reduce(|best, cur| if cur.humidity_pct > best.humidity_pct { cur } else { best })
}

/// Mean temperature across the store; `0.0` for an empty store by policy.
pub fn average_temperature(store: &ObservationStore) -> f64 {
    if store.is_empty() {
        return 0.0;
    }

    let sum: f64 = store.iter().map(|o| o.temperature_f).sum();
    sum / store.len() as f64
}

/// Record count, average temperature, and the three extrema lines.
pub fn statistics_summary(store: &ObservationStore) -> String {
    let (Some(warmest), Some(coldest), Some(most_humid)) = (
        find_warmest(store),
        find_coldest(store),
        find_most_humid(store),
    ) else {
        return NO_DATA_MESSAGE.to_string();
    };

    let mut summary = String::new();
    summary.push_str("=== Weather Statistics Summary ===\n\n");
    summary.push_str(&format!("Number of locations: {}\n\n", store.len()));
    summary.push_str(&format!(
        "Average Temperature: {:.1}°F\n\n",
        average_temperature(store)
    ));
    summary.push_str(&format!(
        "Warmest: {} at {:.1}°F\n",
        warmest.location(),
        warmest.temperature_f
    ));
    summary.push_str(&format!(
        "Coldest: {} at {:.1}°F\n",
        coldest.location(),
        coldest.temperature_f
    ));
    summary.push_str(&format!(
        "Most Humid: {} at {}%\n",
        most_humid.location(),
        most_humid.humidity_pct
    ));

    summary
}
