//! Core library for the `wxboard` dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather fetch-and-parse pipeline
//! - The insertion-ordered observation store
//! - Cross-city comparison and summary statistics
//!
//! It is used by `wxboard-cli`, but can also be reused by other binaries or
//! services.

pub mod compare;
pub mod config;
pub mod model;
pub mod provider;
pub mod store;

pub use config::{Config, ConfigError};
pub use model::Observation;
pub use provider::{FetchError, WeatherProvider, provider_from_config};
pub use store::{IndexError, ObservationStore};
