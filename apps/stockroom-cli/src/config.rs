//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use stockroom_store::StoreConfig;

pub const COLUMN_WIDTH_VAR: &str = "STOCKROOM_COLUMN_WIDTH";
pub const ORDER_ID_LENGTH_VAR: &str = "STOCKROOM_ORDER_ID_LENGTH";

/// Load the store configuration from the process environment.
pub fn load() -> Result<StoreConfig, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load the store configuration from an arbitrary key lookup.
pub fn load_from<F>(lookup: F) -> Result<StoreConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = StoreConfig::default();

    let config = StoreConfig {
        column_width: parse_positive(&lookup, COLUMN_WIDTH_VAR, defaults.column_width)?,
        order_id_length: parse_positive(&lookup, ORDER_ID_LENGTH_VAR, defaults.order_id_length)?,
    };

    Ok(config)
}

fn parse_positive<F>(lookup: &F, key: &str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        },
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} (expected a positive integer)")]
    InvalidValue { key: String, value: String },
}
