//! CLI argument definitions using clap
//!
//! Commands:
//! - cscview serve --data-dir <dir> --port <port>
//! - cscview verify --data-dir <dir>
//! - cscview export --data-dir <dir> --threshold <t> [--classes a,b] --out <file>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cscview - explainable source-classification catalogue dashboard
#[derive(Parser, Debug)]
#[command(name = "cscview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalogue and serve the dashboard API
    Serve {
        /// Directory holding the catalogue tables
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,

        /// Port to bind the HTTP server to
        #[arg(long, default_value_t = 8501)]
        port: u16,
    },

    /// Load and validate the catalogue, print a summary, and exit
    Verify {
        /// Directory holding the catalogue tables
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,
    },

    /// One-shot filter and CSV export without a server
    Export {
        /// Directory holding the catalogue tables
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,

        /// Keep sources with CMP1 strictly above this threshold
        #[arg(long, default_value_t = 0.8)]
        threshold: f64,

        /// Comma-separated class symbols; omitted means all classes
        #[arg(long, value_delimiter = ',')]
        classes: Vec<String>,

        /// Keep only sources with an explanation available
        #[arg(long)]
        require_explanation: bool,

        /// Output CSV path
        #[arg(long)]
        out: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
