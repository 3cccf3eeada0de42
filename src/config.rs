//! Service configuration
//!
//! Loaded from a JSON file when one is given, otherwise defaults apply.
//! `BOOKSTORE_DATABASE_URL` overrides the database URL in either case.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the configured database URL
pub const DATABASE_URL_ENV: &str = "BOOKSTORE_DATABASE_URL";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Database URL (default: "sqlite://bookstore.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://bookstore.db".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_url: default_database_url(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration, file first, then environment override.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                serde_json::from_str(&contents)?
            }
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            config.database_url = url;
        }

        Ok(config)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.database_url, "sqlite://bookstore.db");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig {
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"port": 9000}}"#).unwrap();

        let config = ServiceConfig::load(Some(&path)).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_env_override_wins_over_file_and_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"database_url": "sqlite://file.db"}"#).unwrap();

        // Env vars are process-global; set and clear inside one test so
        // the other load tests (none of which assert database_url) are
        // unaffected under parallel execution.
        std::env::set_var(DATABASE_URL_ENV, "sqlite://env.db");
        let from_file = ServiceConfig::load(Some(&path));
        let from_defaults = ServiceConfig::load(None);
        std::env::remove_var(DATABASE_URL_ENV);

        assert_eq!(from_file.unwrap().database_url, "sqlite://env.db");
        assert_eq!(from_defaults.unwrap().database_url, "sqlite://env.db");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = ServiceConfig::load(Some(Path::new("/nonexistent/config.json")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let result = ServiceConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
