use crate::{
    config::{Config, ConfigError},
    model::Observation,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Per-call fetch failures. Exactly one of these (or a complete
/// [`Observation`]) comes out of every `fetch_current` call; there are no
/// partial successes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure or timeout before a status line was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a status other than 200. The body is
    /// carried verbatim (truncated) and never parsed.
    #[error("provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The body was not valid JSON, or a required field was absent,
    /// mistyped, or out of range.
    #[error("malformed provider response: {0}")]
    Parse(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// One network round-trip for the current weather in `city`.
    /// No retry, no backoff, no caching of identical requests.
    async fn fetch_current(&self, city: &str) -> Result<Observation, FetchError>;
}

/// Construct the OpenWeather provider from config. Fails with
/// [`ConfigError`] when the credentials are missing or still hold the
/// placeholder; no fetch is possible without a constructed provider.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, ConfigError> {
    let provider = OpenWeatherProvider::from_config(config)?;
    Ok(Box::new(provider))
}
