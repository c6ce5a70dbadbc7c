//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LoggerSettings, PushbulletConfig, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl PushbulletConfig {
    /// Validate Pushbullet configuration
    ///
    /// # Validation Rules
    /// - Endpoint must be an absolute http or https URL
    /// - Header names must not be empty
    ///
    /// The access token is not checked here; a missing token is reported when
    /// the channel is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_endpoint).map_err(|e| {
            ConfigError::validation(
                "pushbullet.api_endpoint".to_string(),
                format!("Invalid URL '{}': {}", self.api_endpoint, e),
            )
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ConfigError::validation(
                "pushbullet.api_endpoint",
                "URL must use http or https protocol.",
            ));
        }

        if self.headers.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::validation(
                "pushbullet.headers",
                "Header names cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of: trace, debug, info, warn, error
    /// - At least one output (console or file) must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl FileSettings {
    /// Validate file output configuration
    ///
    /// Only checked when file output is enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "Log file path cannot be empty when file output is enabled.",
            ));
        }

        let format = self.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the complete settings tree
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pushbullet.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_pushbullet_invalid_endpoint() {
        let config = PushbulletConfig {
            api_endpoint: "not-a-url".to_string(),
            ..PushbulletConfig::default()
        };

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "pushbullet.api_endpoint"
        ));
    }

    #[test]
    fn test_pushbullet_non_http_endpoint() {
        let config = PushbulletConfig {
            api_endpoint: "ftp://api.pushbullet.com/v2/pushes".to_string(),
            ..PushbulletConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pushbullet_local_http_endpoint_allowed() {
        let config = PushbulletConfig {
            api_endpoint: "http://127.0.0.1:8080/v2/pushes".to_string(),
            ..PushbulletConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pushbullet_empty_header_name() {
        let mut config = PushbulletConfig::default();
        config.headers.insert(" ".to_string(), "value".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_token_is_not_a_settings_error() {
        let config = PushbulletConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logger_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..LoggerSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_logger_level_case_insensitive() {
        let settings = LoggerSettings {
            level: "WARN".to_string(),
            ..LoggerSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_settings_disabled_skips_checks() {
        let settings = FileSettings {
            enabled: false,
            path: String::new(),
            format: "bogus".to_string(),
            ..FileSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_settings_enabled_empty_path() {
        let settings = FileSettings {
            enabled: true,
            path: "  ".to_string(),
            ..FileSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
