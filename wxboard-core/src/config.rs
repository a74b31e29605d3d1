use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Sentinel shipped in a freshly-written config template. Providers refuse
/// to construct while the key still holds this value.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine platform config directory")]
    NoConfigDir,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize configuration to TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("api_key is empty.\nHint: run `wxboard configure` and enter your OpenWeather API key.")]
    MissingApiKey,

    #[error(
        "api_key still holds the placeholder value.\nHint: run `wxboard configure` and enter your OpenWeather API key."
    )]
    PlaceholderApiKey,

    #[error("api_url is empty")]
    MissingApiUrl,

    #[error("failed to initialize HTTP client: {0}")]
    HttpClient(String),
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "0123abcd..."
/// api_url = "https://api.openweathermap.org/data/2.5/weather"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,

    /// Base endpoint for current-weather requests.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            api_url: default_api_url(),
        }
    }
}

impl Config {
    /// Check that the credentials are usable by a provider. Called at
    /// provider construction; a failure here means no fetch is possible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.api_key == PLACEHOLDER_API_KEY {
            return Err(ConfigError::PlaceholderApiKey);
        }
        if self.api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }
        Ok(())
    }

    /// Load config from disk, or return the placeholder default if the
    /// file doesn't exist yet (first run).
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml = toml::to_string_pretty(self)?;

        fs::write(path, toml).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let dirs =
            ProjectDirs::from("dev", "wxboard", "wxboard-cli").ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_fails_validation_with_placeholder_hint() {
        let cfg = Config::default();
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::PlaceholderApiKey));
        assert!(err.to_string().contains("wxboard configure"));
    }

    #[test]
    fn empty_key_is_rejected() {
        let cfg = Config {
            api_key: String::new(),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn empty_url_is_rejected() {
        let cfg = Config {
            api_key: "real-key".to_string(),
            api_url: String::new(),
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::MissingApiUrl)));
    }

    #[test]
    fn valid_config_passes() {
        let cfg = Config {
            api_key: "real-key".to_string(),
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_api_url_defaults_on_parse() {
        let cfg: Config = toml::from_str(r#"api_key = "abc""#).expect("minimal config must parse");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            api_key: "roundtrip-key".to_string(),
            api_url: "http://localhost:9999/weather".to_string(),
        };
        cfg.save_to(&path).expect("save must succeed");

        let loaded = Config::load_from(&path).expect("load must succeed");
        assert_eq!(loaded.api_key, "roundtrip-key");
        assert_eq!(loaded.api_url, "http://localhost:9999/weather");
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist.toml");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = [not toml").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
