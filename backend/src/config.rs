//! Server configuration.
//!
//! Read from a TOML file (`WATCHERS_CONFIG`, default `watchers.toml`); every
//! key is optional and a missing file means all defaults. `HOST` and `PORT`
//! from the environment take precedence over the file.

use serde::Deserialize;
use std::path::Path;
use std::{env, fs};

pub const DEFAULT_CONFIG_FILE: &str = "watchers.toml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database: String,
    /// Open the page in the default browser once the server is up.
    pub open_browser: bool,
    pub sync: SyncConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SyncConfig {
    pub enabled: bool,
    /// How often the scheduler looks for due watchers.
    pub interval_mins: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database: "watchers.db".to_string(),
            open_browser: true,
            sync: SyncConfig::default(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_mins: 5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("WATCHERS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Self::from_file(Path::new(&path))?;

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000\n\n[sync]\nenabled = false").unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.sync.enabled);
        assert_eq!(config.sync.interval_mins, 5);
    }

    #[test]
    fn malformed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"eighty\"").unwrap();

        assert!(matches!(Config::from_file(file.path()), Err(ConfigError::Toml(_))));
    }
}
