use crate::config::EngineConfig;
use crate::types::AccountId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query and export a wallet ledger dump
#[derive(Parser, Debug)]
#[command(name = "wallet-ledger")]
#[command(about = "Query and export a wallet ledger dump", long_about = None)]
pub struct CliArgs {
    /// Directory holding accounts.dump, payments.dump and favorites.dump
    #[arg(value_name = "DUMP_DIR", help = "Directory with the ledger dump files")]
    pub dump_dir: PathBuf,

    /// Number of worker threads per query
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Worker threads per query (default: CPU cores, 0 = no split)"
    )]
    pub workers: Option<usize>,

    /// Maximum number of payments per history file
    #[arg(
        long = "max-records",
        value_name = "COUNT",
        help = "Payments per history file (default: 1000, 0 = no split)"
    )]
    pub max_records: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations available on a loaded ledger
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print entity counts and the payment total
    Summary,
    /// Print the sum of all payment amounts
    Sum,
    /// Print every payment of an account
    Filter {
        /// Account identifier
        #[arg(long = "account", value_name = "ID")]
        account: AccountId,
    },
    /// Write an account's payment history into a directory
    History {
        /// Account identifier
        #[arg(long = "account", value_name = "ID")]
        account: AccountId,
        /// Existing output directory
        #[arg(long = "out", value_name = "DIR")]
        out: PathBuf,
    },
}

impl CliArgs {
    /// Create an EngineConfig from CLI arguments
    ///
    /// Missing flags fall back to `EngineConfig::default()`.
    pub fn to_engine_config(&self) -> EngineConfig {
        let default = EngineConfig::default();
        EngineConfig::new(
            self.workers.unwrap_or(default.workers),
            self.max_records.unwrap_or(default.history_max_records),
        )
    }
}
