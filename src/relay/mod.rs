//! The upload relay core.
//!
//! # Data Flow
//! ```text
//! POST /upload (multipart body)
//!     → handler.rs (method gate, bounded buffering)
//!     → backend POST /upload (bytes + Content-Type, unmodified)
//!     → handler.rs (status / empty-body checks)
//!     → archive response (application/zip, attachment) to caller
//! ```
//!
//! # Design Decisions
//! - Pure byte pass-through: the relay never interprets payload bytes
//! - Single attempt per request; failures become JSON errors, never
//!   partial binary output

pub mod error;
pub mod handler;

pub use error::RelayError;
pub use handler::upload_handler;
