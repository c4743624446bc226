//! Config validation: reject values the server cannot run with.

use crate::config::AppConfig;
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::Validation("PORT must be non-zero".into()));
    }
    if config.max_connections == 0 {
        return Err(ConfigError::Validation("DB_MAX_CONNECTIONS must be at least 1".into()));
    }
    if config.store_timeout.is_zero() {
        return Err(ConfigError::Validation("STORE_TIMEOUT_MS must be at least 1".into()));
    }
    if config.max_body_bytes == 0 {
        return Err(ConfigError::Validation("MAX_BODY_BYTES must be at least 1".into()));
    }
    if !config.database_url.starts_with("sqlite:") {
        return Err(ConfigError::Validation(format!(
            "DATABASE_URL must be a sqlite: url, got '{}'",
            config.database_url
        )));
    }
    Ok(())
}
