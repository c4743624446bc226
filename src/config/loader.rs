//! Load configuration from environment variables (or any key lookup, for tests).

use crate::config::types::AppConfig;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl AppConfig {
    /// Read from the process environment. Unset keys keep their defaults; malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let config = AppConfig {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            host: parse_or("HOST", get("HOST"), defaults.host)?,
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), defaults.max_connections)?,
            store_timeout: get("STORE_TIMEOUT_MS")
                .map(|v| parse("STORE_TIMEOUT_MS", v).map(Duration::from_millis))
                .transpose()?
                .unwrap_or(defaults.store_timeout),
            store_read_retries: parse_or("STORE_READ_RETRIES", get("STORE_READ_RETRIES"), defaults.store_read_retries)?,
            seed_on_startup: get("SEED_ON_STARTUP")
                .map(|v| parse_bool("SEED_ON_STARTUP", v))
                .transpose()?
                .unwrap_or(defaults.seed_on_startup),
            cors_allowed_origin: get("CORS_ALLOWED_ORIGIN"),
            max_body_bytes: parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), defaults.max_body_bytes)?,
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        };
        validate(&config)?;
        Ok(config)
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    value.map(|v| parse(key, v)).transpose().map(|v| v.unwrap_or(default))
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
