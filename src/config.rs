use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_PRIMARY_DOMAIN, env_vars, external_api,
};
use crate::error::AppError;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the primary (internal) backend
    #[serde(default = "default_primary_domain")]
    pub primary_domain: String,
    /// Base URL of the rate-limited external provider
    #[serde(default = "default_external_domain")]
    pub external_domain: String,
    /// Caller identifier sent in the external provider's identifying header
    #[serde(default = "default_requested_by")]
    pub requested_by: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_primary_domain() -> String {
    DEFAULT_PRIMARY_DOMAIN.to_string()
}

fn default_external_domain() -> String {
    external_api::DEFAULT_DOMAIN.to_string()
}

fn default_requested_by() -> String {
    external_api::REQUESTED_BY_VALUE.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            primary_domain: default_primary_domain(),
            external_domain: default_external_domain(),
            requested_by: default_requested_by(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to defaults when no file exists. Environment variables override
    /// config file values.
    ///
    /// # Environment Variables
    /// - `MAX_BREAK_PRIMARY_DOMAIN` - Override primary backend base URL
    /// - `MAX_BREAK_EXTERNAL_DOMAIN` - Override external provider base URL
    /// - `MAX_BREAK_LOG_FILE` - Override log file path
    /// - `MAX_BREAK_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();
        Self::load_from_path(&config_path).await
    }

    /// Loads configuration from an explicit path, applying env overrides.
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(primary_domain) = std::env::var(env_vars::PRIMARY_DOMAIN) {
            config.primary_domain = primary_domain;
        }

        if let Ok(external_domain) = std::env::var(env_vars::EXTERNAL_DOMAIN) {
            config.external_domain = external_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("primary_domain", &self.primary_domain),
            ("external_domain", &self.external_domain),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("{field} must not be empty")));
            }
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(AppError::config_error(format!(
                    "{field} must start with http:// or https:// (got {value:?})"
                )));
            }
        }

        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error("http_timeout_seconds must be positive"));
        }

        Ok(())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves current configuration to an explicit path, creating parent
    /// directories as needed.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn config_path_display() -> String {
        get_config_path()
    }

    /// Returns the default log directory path.
    pub fn get_log_dir_path() -> String {
        dirs::config_dir()
            .map(|p| p.join("max_break").join("logs"))
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| "./logs".to_string())
    }
}

fn get_config_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("max_break").join("config.toml"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "./config.toml".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    // Loading applies env overrides, so every load test runs serialized
    // against the test that sets them.

    #[tokio::test]
    #[serial]
    async fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from_path(path.to_str().unwrap()).await.unwrap();

        assert_eq!(config.primary_domain, DEFAULT_PRIMARY_DOMAIN);
        assert_eq!(config.external_domain, external_api::DEFAULT_DOMAIN);
        assert_eq!(config.requested_by, external_api::REQUESTED_BY_VALUE);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    #[serial]
    async fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let path = path.to_str().unwrap().to_string();

        let config = Config {
            primary_domain: "http://backend.local:8000/oneFourSeven".to_string(),
            external_domain: "https://api.snooker.org".to_string(),
            requested_by: "TestApp".to_string(),
            log_file_path: Some("/tmp/max_break.log".to_string()),
            http_timeout_seconds: 12,
        };
        config.save_to_path(&path).await.unwrap();

        let loaded = Config::load_from_path(&path).await.unwrap();
        assert_eq!(loaded.primary_domain, config.primary_domain);
        assert_eq!(loaded.requested_by, "TestApp");
        assert_eq!(loaded.log_file_path, config.log_file_path);
        assert_eq!(loaded.http_timeout_seconds, 12);
    }

    #[tokio::test]
    #[serial]
    async fn test_env_vars_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap().to_string();

        let config = Config {
            primary_domain: "http://from-file.local".to_string(),
            http_timeout_seconds: 7,
            ..Config::default()
        };
        config.save_to_path(&path).await.unwrap();

        unsafe {
            std::env::set_var(env_vars::PRIMARY_DOMAIN, "http://from-env.local");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "33");
        }
        let loaded = Config::load_from_path(&path).await;
        unsafe {
            std::env::remove_var(env_vars::PRIMARY_DOMAIN);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        let loaded = loaded.unwrap();
        assert_eq!(loaded.primary_domain, "http://from-env.local");
        assert_eq!(loaded.http_timeout_seconds, 33);
        // Values without an override keep what the file said
        assert_eq!(loaded.external_domain, config.external_domain);
    }

    #[test]
    fn test_validate_rejects_bad_domains() {
        let config = Config {
            primary_domain: "backend.local".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            external_domain: "   ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
