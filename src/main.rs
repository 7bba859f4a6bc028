//! cscview CLI entry point
//!
//! Parses arguments, dispatches to the CLI commands, prints errors to
//! stderr, and exits non-zero on failure. All real logic lives in the
//! library modules.

use cscview::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
