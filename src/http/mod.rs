//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, request ID)
//!     → relay handler (buffer, forward, relay back)
//!     → response to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
