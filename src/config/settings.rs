//! Configuration settings structures for stratus-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "stratus-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_upstream_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_upstream_timeout() -> u64 {
    30
}

fn default_upstream_connect_timeout() -> u64 {
    10
}

fn default_response_ttl() -> u64 {
    300
}

fn default_memory_max_size() -> usize {
    1000
}

fn default_memory_ttl() -> u64 {
    600
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_redis_ttl() -> u64 {
    3600
}

fn default_redis_pool_size() -> u32 {
    4
}

fn default_redis_connection_timeout() -> u64 {
    5
}

fn default_redis_key_prefix() -> String {
    "stratus".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Allowed CORS origin, or "*" for any
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            cors_origin: default_cors_origin(),
        }
    }
}

// ============================================================================
// Upstream Provider Configuration
// ============================================================================

/// OpenWeather provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the provider API
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,

    /// API key attached to every outbound request as `appid`
    /// IMPORTANT: keep this out of committed config files; use the
    /// STRATUS_UPSTREAM__API_KEY environment variable instead
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_upstream_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            api_key: String::new(),
            timeout: default_upstream_timeout(),
            connect_timeout: default_upstream_connect_timeout(),
        }
    }
}

// ============================================================================
// Cache Configuration
// ============================================================================

/// Cache backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Memory,
    Redis,
}

/// Memory cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries in the cache
    #[serde(default = "default_memory_max_size")]
    pub max_size: usize,

    /// Default time-to-live in seconds, used when a write provides none
    #[serde(default = "default_memory_ttl")]
    pub ttl_seconds: u64,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_size: default_memory_max_size(),
            ttl_seconds: default_memory_ttl(),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisCacheConfig {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub url: String,

    /// Default time-to-live in seconds, used when a write provides none
    #[serde(default = "default_redis_ttl")]
    pub ttl_seconds: u64,

    /// Connection pool size
    #[serde(default = "default_redis_pool_size")]
    pub pool_size: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_redis_connection_timeout")]
    pub connection_timeout: u64,

    /// Key prefix for all cache entries
    #[serde(default = "default_redis_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            ttl_seconds: default_redis_ttl(),
            pool_size: default_redis_pool_size(),
            connection_timeout: default_redis_connection_timeout(),
            key_prefix: default_redis_key_prefix(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Cache backend type
    #[serde(default)]
    pub backend: CacheBackend,

    /// TTL in seconds applied to cached origin responses
    #[serde(default = "default_response_ttl")]
    pub response_ttl: u64,

    /// Memory cache settings
    #[serde(default)]
    pub memory: MemoryCacheConfig,

    /// Redis cache settings
    #[serde(default)]
    pub redis: RedisCacheConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: CacheBackend::default(),
            response_ttl: default_response_ttl(),
            memory: MemoryCacheConfig::default(),
            redis: RedisCacheConfig::default(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use colored output (only applies on a terminal)
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream weather provider configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========================================================================
    // Arbitrary implementations for property-based testing
    // ========================================================================

    fn arb_application_config() -> impl Strategy<Value = ApplicationConfig> {
        (
            "[a-z][a-z0-9-]{0,20}",                 // name: valid app name
            "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", // version: semver-like
        )
            .prop_map(|(name, version)| ApplicationConfig { name, version })
    }

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop_oneof![
                Just("127.0.0.1".to_string()),
                Just("0.0.0.0".to_string()),
                Just("localhost".to_string()),
            ],
            1u16..=65535u16, // valid port range
            1u64..=300u64,   // request_timeout
            prop_oneof![
                Just("*".to_string()),
                Just("http://localhost:3000".to_string()),
                Just("https://app.example.com".to_string()),
            ],
        )
            .prop_map(|(host, port, request_timeout, cors_origin)| ServerConfig {
                host,
                port,
                request_timeout,
                cors_origin,
            })
    }

    fn arb_upstream_config() -> impl Strategy<Value = UpstreamConfig> {
        (
            prop_oneof![
                Just("https://api.openweathermap.org/data/2.5".to_string()),
                Just("http://localhost:8080".to_string()),
            ],
            "[a-f0-9]{16,32}", // api_key
            1u64..=120u64,     // timeout
            1u64..=60u64,      // connect_timeout
        )
            .prop_map(|(base_url, api_key, timeout, connect_timeout)| UpstreamConfig {
                base_url,
                api_key,
                timeout,
                connect_timeout,
            })
    }

    fn arb_cache_config() -> impl Strategy<Value = CacheConfig> {
        (
            any::<bool>(),
            prop_oneof![Just(CacheBackend::Memory), Just(CacheBackend::Redis)],
            1u64..=3600u64,     // response_ttl
            1usize..=10_000usize, // memory.max_size
            1u64..=7200u64,     // memory.ttl_seconds
        )
            .prop_map(|(enabled, backend, response_ttl, max_size, ttl_seconds)| CacheConfig {
                enabled,
                backend,
                response_ttl,
                memory: MemoryCacheConfig {
                    max_size,
                    ttl_seconds,
                },
                redis: RedisCacheConfig::default(),
            })
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop_oneof![
                Just("trace".to_string()),
                Just("debug".to_string()),
                Just("info".to_string()),
                Just("warn".to_string()),
                Just("error".to_string()),
            ],
            prop_oneof![
                Just("full".to_string()),
                Just("compact".to_string()),
                Just("json".to_string()),
            ],
            any::<bool>(),
        )
            .prop_map(|(level, format, colored)| LoggerSettings {
                level,
                format,
                colored,
            })
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            arb_application_config(),
            arb_server_config(),
            arb_upstream_config(),
            arb_cache_config(),
            arb_logger_settings(),
        )
            .prop_map(|(application, server, upstream, cache, logger)| Settings {
                application,
                server,
                upstream,
                cache,
                logger,
            })
    }

    // ========================================================================
    // Property-based tests
    // ========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Serializing any valid Settings to TOML and deserializing it back
        /// produces an equivalent Settings instance.
        #[test]
        fn prop_settings_round_trip_serialization(settings in arb_settings()) {
            let toml_str = toml::to_string(&settings)
                .expect("Settings should serialize to TOML");

            let deserialized: Settings = toml::from_str(&toml_str)
                .expect("TOML should deserialize back to Settings");

            prop_assert_eq!(settings, deserialized);
        }
    }

    // ========================================================================
    // Unit tests
    // ========================================================================

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "stratus-rs");
        assert_eq!(config.version, crate::pkg_version());
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.cors_origin, "http://localhost:3000");
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_upstream_config_defaults() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.api_key, "");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.connect_timeout, 10);
    }

    #[test]
    fn test_cache_config_defaults() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.backend, CacheBackend::Memory);
        assert_eq!(config.response_ttl, 300);
        assert_eq!(config.memory.max_size, 1000);
        assert_eq!(config.memory.ttl_seconds, 600);
        assert_eq!(config.redis.url, "redis://127.0.0.1:6379");
        assert_eq!(config.redis.ttl_seconds, 3600);
        assert_eq!(config.redis.key_prefix, "stratus");
    }

    #[test]
    fn test_logger_settings_defaults() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.level, "info");
        assert_eq!(settings.format, "compact");
        assert!(settings.colored);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings::default();
        let toml_str = toml::to_string(&settings).expect("Failed to serialize");
        let deserialized: Settings = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml_str = r#"
            [server]
            port = 8080

            [upstream]
            api_key = "deadbeef"
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1"); // default
        assert_eq!(settings.upstream.api_key, "deadbeef");
        assert_eq!(
            settings.upstream.base_url,
            "https://api.openweathermap.org/data/2.5" // default
        );
        assert!(settings.cache.enabled); // default
    }

    #[test]
    fn test_settings_deserialize_full() {
        let toml_str = r#"
            [application]
            name = "gateway"
            version = "1.0.0"

            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout = 60
            cors_origin = "*"

            [upstream]
            base_url = "http://localhost:8080"
            api_key = "deadbeef"
            timeout = 15
            connect_timeout = 5

            [cache]
            enabled = true
            backend = "redis"
            response_ttl = 120

            [cache.memory]
            max_size = 50
            ttl_seconds = 30

            [cache.redis]
            url = "redis://cache.internal:6380"
            ttl_seconds = 900
            pool_size = 8
            connection_timeout = 2
            key_prefix = "wx"

            [logger]
            level = "debug"
            format = "json"
            colored = false
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");

        assert_eq!(settings.application.name, "gateway");
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.cors_origin, "*");
        assert_eq!(settings.upstream.base_url, "http://localhost:8080");
        assert_eq!(settings.upstream.timeout, 15);
        assert_eq!(settings.cache.backend, CacheBackend::Redis);
        assert_eq!(settings.cache.response_ttl, 120);
        assert_eq!(settings.cache.memory.max_size, 50);
        assert_eq!(settings.cache.redis.url, "redis://cache.internal:6380");
        assert_eq!(settings.cache.redis.pool_size, 8);
        assert_eq!(settings.cache.redis.key_prefix, "wx");
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.logger.format, "json");
        assert!(!settings.logger.colored);
    }

    #[test]
    fn test_cache_backend_parses_lowercase() {
        let config: CacheConfig = toml::from_str(r#"backend = "redis""#).unwrap();
        assert_eq!(config.backend, CacheBackend::Redis);
    }
}
