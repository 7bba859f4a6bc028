//! cscview - explainable source-classification catalogue dashboard
//!
//! Serves a pre-computed point-source classification catalogue with
//! per-source feature contributions: multi-criterion filtering, local
//! and aggregate explanation rankings, plot-ready chart data, and CSV
//! export.

pub mod catalogue;
pub mod cli;
pub mod explain;
pub mod export;
pub mod filter;
pub mod http_server;
pub mod observability;
pub mod render;
pub mod session;
