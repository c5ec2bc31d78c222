//! Validators for CLI argument values.

use std::net::IpAddr;
use std::path::PathBuf;

/// Validate a configuration file path: it must exist and be a TOML file.
pub fn validate_config_file_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("Configuration file does not exist: {}", value));
    }
    if !path.is_file() {
        return Err(format!("Configuration path is not a file: {}", value));
    }
    if path.extension().and_then(|e| e.to_str()) != Some("toml") {
        return Err(format!("Configuration file must be a .toml file: {}", value));
    }
    Ok(path)
}

/// Validate a host address: an IP address, "localhost", or a plausible hostname.
pub fn validate_host_address(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }
    if value == "localhost" || value.parse::<IpAddr>().is_ok() {
        return Ok(value.to_string());
    }
    // Hostname: alphanumeric labels separated by dots or dashes
    let valid_hostname = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && !value.starts_with('-')
        && !value.ends_with('-');
    if valid_hostname {
        Ok(value.to_string())
    } else {
        Err(format!("Invalid host address: {}", value))
    }
}
