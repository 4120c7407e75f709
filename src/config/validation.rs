//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports, body cap)
//! - Check the assembled backend URI actually parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::RelayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the error refers to (e.g., "backend.port").
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("not a valid socket address: {:?}", config.listener.bind_address),
        });
    }

    if config.backend.host.trim().is_empty() {
        errors.push(ValidationError {
            field: "backend.host",
            message: "must not be empty".to_string(),
        });
    }

    if config.backend.port == 0 {
        errors.push(ValidationError {
            field: "backend.port",
            message: "must be non-zero".to_string(),
        });
    }

    if !config.backend.upload_path.starts_with('/') {
        errors.push(ValidationError {
            field: "backend.upload_path",
            message: format!("must start with '/': {:?}", config.backend.upload_path),
        });
    }

    if config.backend.upload_uri().is_err() {
        errors.push(ValidationError {
            field: "backend",
            message: "host, port and upload_path do not form a valid URI".to_string(),
        });
    }

    if config.transfer.download_filename.trim().is_empty() {
        errors.push(ValidationError {
            field: "transfer.download_filename",
            message: "must not be empty".to_string(),
        });
    } else if config.transfer.download_filename.contains('"') {
        errors.push(ValidationError {
            field: "transfer.download_filename",
            message: "must not contain double quotes".to_string(),
        });
    }

    if config.transfer.archive_content_type.trim().is_empty() {
        errors.push(ValidationError {
            field: "transfer.archive_content_type",
            message: "must not be empty".to_string(),
        });
    }

    if config.transfer.max_body_bytes == 0 {
        errors.push(ValidationError {
            field: "transfer.max_body_bytes",
            message: "must be non-zero".to_string(),
        });
    }

    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!(
                "unknown level {:?}, expected one of {:?}",
                config.observability.log_level, LEVELS
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.backend.port = 0;
        config.transfer.max_body_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"listener.bind_address"));
        assert!(fields.contains(&"backend.port"));
        assert!(fields.contains(&"transfer.max_body_bytes"));
    }

    #[test]
    fn upload_path_must_be_absolute() {
        let mut config = RelayConfig::default();
        config.backend.upload_path = "upload".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "backend.upload_path"));
    }

    #[test]
    fn quoted_filename_is_rejected() {
        let mut config = RelayConfig::default();
        config.transfer.download_filename = "bad\".zip".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "transfer.download_filename"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = RelayConfig::default();
        config.observability.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "observability.log_level"));
    }
}
