//! Observability
//!
//! Structured JSON logging for startup, filter, and export events.

mod logger;

pub use logger::{Logger, Severity};
