//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files, and
//! every section has defaults so an empty config file is valid.

use axum::http::uri::{InvalidUri, Uri};
use serde::{Deserialize, Serialize};

/// Root configuration for the upload relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Backend service the relay forwards uploads to.
    pub backend: BackendConfig,

    /// Transfer behavior (archive headers, body cap).
    pub transfer: TransferConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Backend service configuration.
///
/// Host and port can be overridden at startup via the `BACKEND_HOST` and
/// `BACKEND_PORT` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend host (e.g., "127.0.0.1").
    pub host: String,

    /// Backend port.
    pub port: u16,

    /// Path on the backend that accepts the forwarded upload.
    pub upload_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            upload_path: "/upload".to_string(),
        }
    }
}

impl BackendConfig {
    /// Full URI of the backend upload endpoint.
    pub fn upload_uri(&self) -> Result<Uri, InvalidUri> {
        format!("http://{}:{}{}", self.host, self.port, self.upload_path).parse()
    }
}

/// Transfer behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Filename offered to the caller in the Content-Disposition header.
    pub download_filename: String,

    /// Content-Type set on the relayed archive response.
    pub archive_content_type: String,

    /// Maximum inbound request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            download_filename: "filtered_chunks.zip".to_string(),
            archive_content_type: "application/zip".to_string(),
            max_body_bytes: 50 * 1024 * 1024, // 50 MiB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
