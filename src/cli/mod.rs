// CLI module
// Command-line interface, argument parsing and command execution

mod args;

pub use args::{CliArgs, Command};

use crate::config::EngineConfig;
use crate::core::Ledger;
use crate::io::write_history;
use crate::types::{LedgerError, Result};
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Load the dump directory and run the requested command
///
/// Results are written to `output`, one item per line.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<()> {
    let config = args.to_engine_config();

    let mut ledger = Ledger::new();
    ledger.import(&args.dump_dir)?;

    execute(&ledger, &args.command, &config, output)
}

fn execute(
    ledger: &Ledger,
    command: &Command,
    config: &EngineConfig,
    output: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Summary => {
            let total = ledger.sum_payments(config.workers)?;
            emit(
                output,
                format!(
                    "accounts={} payments={} favorites={} total={}",
                    ledger.accounts().len(),
                    ledger.payments().len(),
                    ledger.favorites().len(),
                    total
                ),
            )
        }
        Command::Sum => emit(output, ledger.sum_payments(config.workers)?.to_string()),
        Command::Filter { account } => {
            let mut payments = ledger.filter_payments(*account, config.workers)?;
            payments.sort_by(|a, b| a.id.cmp(&b.id));
            for payment in payments {
                emit(
                    output,
                    format!(
                        "{};{};{};{};{}",
                        payment.id,
                        payment.account_id,
                        payment.amount,
                        payment.category,
                        payment.status
                    ),
                )?;
            }
            Ok(())
        }
        Command::History { account, out } => {
            let history = ledger.export_account_history(*account)?;
            for path in write_history(&history, out, config.history_max_records)? {
                emit(output, path.display().to_string())?;
            }
            Ok(())
        }
    }
}

fn emit(output: &mut dyn Write, line: String) -> Result<()> {
    writeln!(output, "{}", line).map_err(|e| LedgerError::output_failed(&e))
}
