use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_LIVE_API_URL, DEFAULT_STATS_API_URL, env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub mod credential;
pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Application settings.
///
/// Everything here is optional: without a config file the defaults point at
/// the public services. The stats API token is not part of this file, see
/// [`credential`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base address of the statistics API.
    #[serde(default = "default_stats_api_url")]
    pub stats_api_url: String,
    /// Base address of the live scores service.
    #[serde(default = "default_live_api_url")]
    pub live_api_url: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_stats_api_url() -> String {
    DEFAULT_STATS_API_URL.to_string()
}

fn default_live_api_url() -> String {
    DEFAULT_LIVE_API_URL.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_api_url: default_stats_api_url(),
            live_api_url: default_live_api_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to defaults when no file exists. Environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `SOCCER_CLI_STATS_URL` - Override the stats API address
    /// - `SOCCER_CLI_LIVE_URL` - Override the live scores address
    /// - `SOCCER_CLI_LOG_FILE` - Override log file path
    /// - `SOCCER_CLI_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a specific file without applying overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies `SOCCER_CLI_*` environment variables on top of current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::STATS_API_URL) {
            self.stats_api_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::LIVE_API_URL) {
            self.live_api_url = url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.stats_api_url,
            &self.live_api_url,
            &self.log_file_path,
            self.http_timeout_seconds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::STATS_API_URL);
            std::env::remove_var(env_vars::LIVE_API_URL);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[test]
    fn test_default_config_points_at_public_services() {
        let config = Config::default();
        assert_eq!(config.stats_api_url, DEFAULT_STATS_API_URL);
        assert_eq!(config.live_api_url, DEFAULT_LIVE_API_URL);
        assert_eq!(config.log_file_path, None);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
stats_api_url = "https://stats.example.com/v1"
live_api_url = "https://live.example.com"
log_file_path = "/custom/log/path"
http_timeout_seconds = 5
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.stats_api_url, "https://stats.example.com/v1");
        assert_eq!(config.live_api_url, "https://live.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults_for_missing_keys() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "http_timeout_seconds = 10\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.stats_api_url, DEFAULT_STATS_API_URL);
        assert_eq!(config.live_api_url, DEFAULT_LIVE_API_URL);
        assert_eq!(config.http_timeout_seconds, 10);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "stats_api_url = [").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::STATS_API_URL, "https://env-stats.example.com");
            std::env::set_var(env_vars::LIVE_API_URL, "https://env-live.example.com");
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "12");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.stats_api_url, "https://env-stats.example.com");
        assert_eq!(config.live_api_url, "https://env-live.example.com");
        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert_eq!(config.http_timeout_seconds, 12);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_timeout_override_is_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);

        clear_env();
    }
}
