//! Interactive multi-city session. Cities are fetched one at a time into
//! the ordered store; comparisons and statistics run on demand.
//!
//! The session is the single writer of its store; fetches run one at a
//! time, so no mutation ever races another.

use inquire::{Confirm, InquireError, Select, Text};
use tracing::debug;
use wxboard_core::{Config, ObservationStore, WeatherProvider, compare, provider_from_config};

use crate::display;

const MENU: &[&str] = &[
    "Add city",
    "Show all",
    "Compare two cities",
    "Statistics summary",
    "Remove city",
    "Clear all",
    "Quit",
];

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut store = ObservationStore::new();

    println!("wxboard — add a city to fetch its current weather.");

    loop {
        let choice = match Select::new("What next?", MENU.to_vec()).prompt() {
            Ok(c) => c,
            Err(InquireError::OperationCanceled) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            "Add city" => add_city(provider.as_ref(), &mut store).await,
            "Show all" => print!("{}", display::render_store(&store)),
            "Compare two cities" => compare_two(&store),
            "Statistics summary" => println!("{}", compare::statistics_summary(&store)),
            "Remove city" => remove_city(&mut store),
            "Clear all" => clear_all(&mut store),
            _ => break,
        }
    }

    Ok(())
}

async fn add_city(provider: &dyn WeatherProvider, store: &mut ObservationStore) {
    let Ok(input) = Text::new("City name:").prompt() else {
        return;
    };

    let city = input.trim();
    if city.is_empty() {
        println!("Please enter a city name.");
        return;
    }

    // One record per city is a session convention; the store itself
    // accepts duplicates.
    if store.contains(city) {
        println!("{city} is already in the list!");
        return;
    }

    match provider.fetch_current(city).await {
        Ok(obs) => {
            println!("{}", display::summary_line(&obs));
            store.append(obs);
        }
        Err(err) => {
            debug!(city, %err, "fetch failed");
            println!("Error fetching weather: {err}");
        }
    }
}

fn compare_two(store: &ObservationStore) {
    if store.len() < 2 {
        println!("Add at least two cities to compare.");
        return;
    }

    let locations: Vec<String> = store.iter().map(|o| o.location()).collect();

    let Some(first) = pick("First city:", &locations) else {
        return;
    };
    let Some(second) = pick("Second city:", &locations) else {
        return;
    };
    if first == second {
        println!("Pick two different cities.");
        return;
    }

    // Both indices come from the snapshot rendered above.
    let (Ok(a), Ok(b)) = (store.get(first), store.get(second)) else {
        return;
    };
    println!("{}", compare::full_comparison(a, b));
}

fn remove_city(store: &mut ObservationStore) {
    if store.is_empty() {
        println!("Nothing to remove.");
        return;
    }

    let locations: Vec<String> = store.iter().map(|o| o.location()).collect();
    let Some(index) = pick("Remove which city?", &locations) else {
        return;
    };

    match store.remove(index) {
        Ok(removed) => println!("Removed {}.", removed.location()),
        Err(err) => println!("{err}"),
    }
}

fn clear_all(store: &mut ObservationStore) {
    if store.is_empty() {
        println!("Nothing to clear.");
        return;
    }

    let confirmed = Confirm::new("Clear all weather data?")
        .with_default(false)
        .prompt()
        .unwrap_or(false);

    if confirmed {
        store.clear();
        println!("Cleared.");
    }
}

fn pick(prompt: &str, options: &[String]) -> Option<usize> {
    match Select::new(prompt, options.to_vec()).raw_prompt() {
        Ok(choice) => Some(choice.index),
        Err(_) => None,
    }
}
