//! Upload relay gateway.
//!
//! Accepts a file upload over HTTP, forwards the raw body to a backend
//! processing service, and relays the backend's ZIP archive back to the
//! caller as a download.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────┐
//!                   │              UPLOAD RELAY                │
//!                   │                                          │
//!  POST /upload     │  ┌─────────┐      ┌──────────────────┐  │
//!  ─────────────────┼─▶│  http   │─────▶│  relay handler   │  │
//!  (multipart body) │  │ server  │      │ buffer → forward │──┼──▶ Backend
//!                   │  └─────────┘      └────────┬─────────┘  │    POST /upload
//!                   │                            │            │
//!  archive or       │                            ▼            │
//!  JSON error       │                   ┌──────────────────┐  │
//!  ◀────────────────┼───────────────────│ archive response │◀─┼─── ZIP bytes
//!                   │                   └──────────────────┘  │
//!                   │                                          │
//!                   │  config · lifecycle · observability      │
//!                   └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use upload_relay::config;
use upload_relay::lifecycle::{signals, Shutdown};
use upload_relay::observability;
use upload_relay::HttpServer;

/// Command-line options.
#[derive(Parser, Debug)]
#[command(name = "upload-relay", about = "Forwards file uploads to a processing backend")]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;

    observability::logging::init(&config.observability.log_level);

    tracing::info!("upload-relay v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_host = %config.backend.host,
        backend_port = config.backend.port,
        max_body_bytes = config.transfer.max_body_bytes,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::trigger_on_ctrl_c(shutdown));

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
