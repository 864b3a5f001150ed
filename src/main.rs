//! Wallet Ledger CLI
//!
//! Command-line interface for querying a ledger export directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- dump/ summary
//! cargo run -- --workers 8 dump/ sum
//! cargo run -- dump/ filter --account 1
//! cargo run -- --max-records 100 dump/ history --account 1 --out history/
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug`, `info` or `warn` to control logging verbosity
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unreadable dump, malformed record, unknown account, etc.)

use std::process;
use wallet_ledger::cli;

fn main() {
    env_logger::init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Results go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
