//! CLI module
//!
//! Provides the command-line interface:
//! - serve: load the catalogue and serve the dashboard API
//! - verify: load and validate the catalogue, then exit
//! - export: one-shot filter + CSV export

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{export_csv, run, run_command, serve, verify};
pub use errors::{CliError, CliResult};
