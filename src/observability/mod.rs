//! Observability module
//!
//! Structured logging for `adjuclock` via `tracing`.

pub mod logging;

pub use logging::{LogFormat, init_logging};
