//! The upload relay handler.
//!
//! # Responsibilities
//! - Reject anything that is not a POST before touching the network
//! - Buffer the full inbound body (bounded by `transfer.max_body_bytes`)
//! - Forward the bytes unmodified to the backend, Content-Type included
//! - Relay the backend's archive back with download headers
//! - Translate every failure into a structured JSON error
//!
//! The relay never parses the bytes it carries. The inbound body is expected
//! to be a multipart form (a required `contentFile` field plus an optional
//! `writeLikeFile` field), but field names are the backend's business.

use std::error::Error as _;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;
use crate::relay::error::RelayError;

/// Axum entry point: run the relay and flatten errors into responses.
pub async fn upload_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    match relay(&state, request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(
                request_id = %request_id,
                status = %error.status(),
                error = %error,
                "Relay failed"
            );
            error.into_response()
        }
    }
}

/// Relay one upload: buffer, forward, relay back.
async fn relay(state: &AppState, request: Request<Body>) -> Result<Response, RelayError> {
    if request.method() != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let (parts, body) = request.into_parts();
    let content_type = parts.headers.get(header::CONTENT_TYPE).cloned();

    // Full buffering: length and content type must be known before the
    // outbound call, so chunked inbound bodies are not streamed through.
    let limit = state.transfer.max_body_bytes;
    let body_bytes = to_bytes(body, limit).await.map_err(|e| {
        if is_length_limit(&e) {
            RelayError::PayloadTooLarge { limit }
        } else {
            RelayError::BodyRead(e)
        }
    })?;

    tracing::debug!(bytes = body_bytes.len(), uri = %state.backend_uri, "Forwarding upload to backend");

    let mut outbound = Request::builder()
        .method(Method::POST)
        .uri(state.backend_uri.clone());
    if let Some(content_type) = content_type {
        outbound = outbound.header(header::CONTENT_TYPE, content_type);
    }
    let outbound = outbound.body(Body::from(body_bytes))?;

    // One shot: no retry, no timeout. A stuck backend blocks this call.
    let response = state
        .client
        .request(outbound)
        .await
        .map_err(|e| RelayError::BackendUnreachable(Box::new(e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::BackendError { status });
    }

    let archive = to_bytes(Body::new(response.into_body()), usize::MAX)
        .await
        .map_err(|e| RelayError::BackendUnreachable(Box::new(e)))?;

    if archive.is_empty() {
        return Err(RelayError::EmptyResponse);
    }

    tracing::info!(bytes = archive.len(), "Relaying archive to caller");

    Ok(archive_response(state, archive))
}

/// Build the download response around the backend's bytes.
fn archive_response(state: &AppState, archive: Bytes) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.transfer.download_filename
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, state.transfer.archive_content_type.clone()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive,
    )
        .into_response()
}

/// True when the body read failed because the size cap was hit.
fn is_length_limit(error: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(e) = source {
        if e.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}
