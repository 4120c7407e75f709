//! Process lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C
//!     → signals.rs (install handler, wait)
//!     → shutdown.rs (broadcast to subscribers)
//!     → http server drains in-flight requests and stops
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
