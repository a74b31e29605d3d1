use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;
use wxboard_core::{Config, provider_from_config};

use crate::{dashboard, display};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxboard", version, about = "City weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and endpoint.
    Configure,

    /// Fetch and print current weather for a single city.
    Show {
        /// City name, e.g. "Paris" or "New York".
        city: String,
    },

    /// Interactive multi-city dashboard session (the default).
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Dashboard) {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
            Command::Dashboard => dashboard::run().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // A missing or unconfigured file still yields a template to edit.
    let current = Config::load().unwrap_or_default();

    let api_key = Text::new("OpenWeather API key:")
        .prompt()
        .context("configuration aborted")?;

    let api_url = Text::new("API endpoint:")
        .with_default(&current.api_url)
        .prompt()
        .context("configuration aborted")?;

    let cfg = Config {
        api_key: api_key.trim().to_string(),
        api_url: api_url.trim().to_string(),
    };
    cfg.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let obs = provider
        .fetch_current(city)
        .await
        .with_context(|| format!("failed to fetch weather for '{city}'"))?;

    print!("{}", display::render_observation(&obs));
    Ok(())
}
