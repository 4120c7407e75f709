//! OS signal wiring for graceful shutdown.

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C and trigger the shutdown coordinator.
pub async fn trigger_on_ctrl_c(shutdown: Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}
