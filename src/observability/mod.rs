//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the request ID from the
//!   x-request-id middleware flows through all relay log events
//! - No metrics endpoint: the relay is a single handler, logs carry
//!   enough signal

pub mod logging;
