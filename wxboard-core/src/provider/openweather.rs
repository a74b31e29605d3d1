use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::{Config, ConfigError},
    model::Observation,
};

use super::{FetchError, WeatherProvider};

/// Fixed, not caller-configurable. Callers needing different limits or
/// retries wrap the provider instead.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const READ_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.api_url.clone(),
            http,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    /// Range/shape checks serde cannot express. A failure here means no
    /// record is constructed at all.
    fn into_observation(self) -> Result<Observation, FetchError> {
        let Some(first) = self.weather.first() else {
            return Err(FetchError::Parse("weather array is empty".to_string()));
        };

        if self.name.is_empty() {
            return Err(FetchError::Parse("name is empty".to_string()));
        }
        if self.sys.country.is_empty() {
            return Err(FetchError::Parse("sys.country is empty".to_string()));
        }
        if self.main.humidity > 100 {
            return Err(FetchError::Parse(format!(
                "humidity {}% out of range",
                self.main.humidity
            )));
        }
        if self.wind.speed < 0.0 {
            return Err(FetchError::Parse(format!(
                "negative wind speed {}",
                self.wind.speed
            )));
        }

        Ok(Observation {
            main_condition: first.main.clone(),
            description: first.description.clone(),
            city_name: self.name,
            country: self.sys.country,
            temperature_f: self.main.temp,
            feels_like_f: self.main.feels_like,
            humidity_pct: self.main.humidity,
            wind_speed_mph: self.wind.speed,
            fetched_at: Utc::now(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &str) -> Result<Observation, FetchError> {
        debug!(city, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            warn!(%status, city, "OpenWeather rejected current-weather request");
            return Err(FetchError::Api {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body = res.text().await?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        parsed.into_observation()
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
