//! Startup validation for loaded settings.
//!
//! Validation runs once after configuration loading and again after CLI
//! overrides are merged; a failure aborts startup before any network
//! resource is created.

use crate::config::error::ConfigError;
use crate::config::settings::{CacheConfig, LoggerSettings, ServerConfig, Settings, UpstreamConfig};
use crate::logger::LogFormat;

impl Settings {
    /// Validates the complete configuration tree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.upstream.validate()?;
        self.cache.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::validation("server.host", "Host cannot be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::validation("server.port", "Port cannot be 0"));
        }
        Ok(())
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::validation(
                "upstream.base_url",
                "Upstream base URL cannot be empty",
            ));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::validation(
                "upstream.api_key",
                "Upstream API key is required (set STRATUS_UPSTREAM__API_KEY)",
            ));
        }
        if self.timeout == 0 {
            return Err(ConfigError::validation(
                "upstream.timeout",
                "Upstream timeout must be positive",
            ));
        }
        Ok(())
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.response_ttl == 0 {
            return Err(ConfigError::validation(
                "cache.response_ttl",
                "Response TTL must be positive",
            ));
        }
        if self.memory.max_size == 0 {
            return Err(ConfigError::validation(
                "cache.memory.max_size",
                "Memory cache size must be positive",
            ));
        }
        if self.redis.pool_size == 0 {
            return Err(ConfigError::validation(
                "cache.redis.pool_size",
                "Redis pool size must be positive",
            ));
        }
        Ok(())
    }
}

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level.is_empty() {
            return Err(ConfigError::validation(
                "logger.level",
                "Log level cannot be empty",
            ));
        }
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.upstream.api_key = "deadbeef".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_fails() {
        let settings = Settings::default();
        let result = settings.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, message }) = result {
            assert_eq!(field, "upstream.api_key");
            assert!(message.contains("required"));
        } else {
            panic!("Expected ValidationError");
        }
    }

    #[test]
    fn test_zero_port_fails() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        let result = settings.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "server.port");
        }
    }

    #[test]
    fn test_zero_response_ttl_fails() {
        let mut settings = valid_settings();
        settings.cache.response_ttl = 0;
        let result = settings.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "cache.response_ttl");
        }
    }

    #[test]
    fn test_zero_memory_size_fails() {
        let mut settings = valid_settings();
        settings.cache.memory.max_size = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_log_format_fails() {
        let mut settings = valid_settings();
        settings.logger.format = "xml".to_string();
        let result = settings.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "logger.format");
        }
    }

    #[test]
    fn test_empty_base_url_fails() {
        let mut settings = valid_settings();
        settings.upstream.base_url = String::new();
        assert!(settings.validate().is_err());
    }
}
