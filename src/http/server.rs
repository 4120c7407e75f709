//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the relay handler
//! - Wire up middleware (tracing, request ID)
//! - Build the outbound HTTP client shared by all requests
//! - Serve with graceful shutdown

use axum::body::Body;
use axum::http::uri::{InvalidUri, Uri};
use axum::routing::any;
use axum::Router;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{RelayConfig, TransferConfig};
use crate::relay::upload_handler;

/// Application state injected into handlers.
///
/// One instance per process; the client is cheap to clone and pools
/// connections internally.
#[derive(Clone)]
pub struct AppState {
    pub client: Client<HttpConnector, Body>,
    pub backend_uri: Uri,
    pub transfer: TransferConfig,
}

/// HTTP server for the upload relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the configured backend address does not form a URI,
    /// which validation normally catches earlier.
    pub fn new(config: RelayConfig) -> Result<Self, InvalidUri> {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        let backend_uri = config.backend.upload_uri()?;

        let state = AppState {
            client,
            backend_uri,
            transfer: config.transfer.clone(),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The upload route is registered with `any()` so the handler owns the
    /// 405 path (and its `Allow` header) instead of the framework.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/upload", any(upload_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.upload_uri().map(|u| u.to_string()).unwrap_or_default(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
