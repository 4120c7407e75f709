//! Relay error taxonomy and HTTP mapping.
//!
//! Every failure is caught at the relay boundary and converted into a
//! structured JSON body, so the caller sees either a complete archive or
//! `{"error": "..."}` and never a mixture of the two.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while relaying one upload.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed, use POST")]
    MethodNotAllowed,

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("Failed to build backend request: {0}")]
    RequestBuild(#[from] axum::http::Error),

    #[error("Backend unreachable: {0}")]
    BackendUnreachable(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Backend returned status {status}")]
    BackendError { status: StatusCode },

    #[error("Backend returned an empty archive")]
    EmptyResponse,
}

impl RelayError {
    /// Status code the error maps to on the wire.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));

        match self {
            // Wrong verb also advertises the one we accept.
            RelayError::MethodNotAllowed => {
                (status, [(header::ALLOW, "POST")], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_not_allowed_advertises_post() {
        let response = RelayError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }

    #[test]
    fn backend_failures_map_to_server_error() {
        let errors = [
            RelayError::BackendUnreachable("connection refused".into()),
            RelayError::BackendError {
                status: StatusCode::BAD_GATEWAY,
            },
            RelayError::EmptyResponse,
        ];
        for error in errors {
            assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn oversized_payload_maps_to_413() {
        let error = RelayError::PayloadTooLarge { limit: 16 };
        assert_eq!(error.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(error.to_string().contains("16"));
    }
}
