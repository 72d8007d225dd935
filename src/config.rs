// ABOUTME: Application configuration loaded from TOML with environment overrides
// Resolution order: defaults, config file, environment, then command-line flags

use crate::api::{DEFAULT_FLAGS_URL, DEFAULT_MOVIES_URL};
use clap::ValueEnum;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const FLAGS_URL_ENV: &str = "FLAGDECK_FLAGS_URL";
pub const MOVIES_URL_ENV: &str = "FLAGDECK_MOVIES_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Screen shown at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Flags,
    Movies,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub flags_api_url: String,
    pub movies_api_url: String,
    pub poll_interval_secs: u64,
    pub toast_duration_ms: u64,
    pub request_timeout_secs: u64,
    pub start_view: StartView,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flags_api_url: DEFAULT_FLAGS_URL.to_string(),
            movies_api_url: DEFAULT_MOVIES_URL.to_string(),
            poll_interval_secs: 30,
            toast_duration_ms: 5000,
            request_timeout_secs: 30,
            start_view: StartView::Flags,
        }
    }
}

impl Config {
    /// `~/.flagdeck/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".flagdeck").join("config.toml"))
    }

    /// Loads defaults, then the given file (or the default path when it exists),
    /// then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `FLAGDECK_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(FLAGS_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.flags_api_url = url;
        }
        if let Some(url) = lookup(MOVIES_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.movies_api_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("flags_api_url", &self.flags_api_url),
            ("movies_api_url", &self.movies_api_url),
        ] {
            Url::parse(url).map_err(|e| ConfigError::Invalid(format!("{name} '{url}': {e}")))?;
        }

        for (name, value) in [
            ("poll_interval_secs", self.poll_interval_secs),
            ("toast_duration_ms", self.toast_duration_ms),
            ("request_timeout_secs", self.request_timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be greater than zero")));
            }
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_match_services() {
        let config = Config::default();
        assert_eq!(config.flags_api_url, "http://localhost:8080/api");
        assert_eq!(config.movies_api_url, "http://localhost:8081/api");
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.toast_duration(), Duration::from_millis(5000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml("poll_interval_secs = 10\nstart_view = \"movies\"\n").unwrap();
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.start_view, StartView::Movies);
        assert_eq!(config.flags_api_url, DEFAULT_FLAGS_URL);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            Config::from_toml("poll_interval_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "flags_api_url = \"http://flags.internal/api\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.flags_api_url, "http://flags.internal/api");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn env_overrides_urls() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            FLAGS_URL_ENV => Some("http://flags:9000/api".to_string()),
            MOVIES_URL_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.flags_api_url, "http://flags:9000/api");
        assert_eq!(config.movies_api_url, DEFAULT_MOVIES_URL);
    }

    #[test]
    fn validate_rejects_zero_durations_and_bad_urls() {
        let config = Config {
            toast_duration_ms: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = Config {
            movies_api_url: "localhost".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
