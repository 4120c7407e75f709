//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load the configuration, apply environment overrides, and validate.
///
/// With no path, starts from defaults so the relay runs without a config
/// file at all.
pub fn load(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RelayConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Override selected fields from environment variables.
///
/// Recognized: `BACKEND_HOST`, `BACKEND_PORT`, `RELAY_BIND_ADDRESS`.
/// Invalid values are logged and ignored rather than silently applied.
pub fn apply_env_overrides(config: &mut RelayConfig) {
    if let Ok(host) = std::env::var("BACKEND_HOST") {
        tracing::info!(host = %host, "BACKEND_HOST override applied");
        config.backend.host = host;
    }

    if let Ok(port) = std::env::var("BACKEND_PORT") {
        match port.parse::<u16>() {
            Ok(port) => {
                tracing::info!(port, "BACKEND_PORT override applied");
                config.backend.port = port;
            }
            Err(e) => {
                tracing::warn!(value = %port, error = %e, "Invalid BACKEND_PORT, keeping configured port");
            }
        }
    }

    if let Ok(addr) = std::env::var("RELAY_BIND_ADDRESS") {
        tracing::info!(address = %addr, "RELAY_BIND_ADDRESS override applied");
        config.listener.bind_address = addr;
    }
}
