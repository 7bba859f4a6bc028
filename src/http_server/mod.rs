//! HTTP surface of the dashboard
//!
//! Session lifecycle, filter submission, selection, export, and the
//! explanation/chart-data endpoints.

mod config;
mod explain_routes;
mod server;
mod session_routes;

pub use config::HttpServerConfig;
pub use server::{AppState, HttpServer};
pub use session_routes::{ExportScope, FilterRequest, SelectionRequest};
