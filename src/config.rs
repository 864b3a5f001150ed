//! Engine configuration
//!
//! Defaults for the knobs the ledger's callers would otherwise have to pass
//! on every call: the number of query workers and the history chunk size.

use log::debug;

/// Default number of records per history file
pub const DEFAULT_HISTORY_MAX_RECORDS: usize = 1000;

/// Configuration for queries and history export
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker threads per sum/filter query (`0` means one worker, no split)
    pub workers: usize,
    /// Maximum number of payments per history file (`0` means no cap)
    pub history_max_records: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            history_max_records: DEFAULT_HISTORY_MAX_RECORDS,
        }
    }
}

impl EngineConfig {
    /// Create a new EngineConfig with custom values
    ///
    /// Any worker count is accepted. A zero `history_max_records` is kept
    /// and means history export writes a single file.
    pub fn new(workers: usize, history_max_records: usize) -> Self {
        if history_max_records == 0 {
            debug!("history_max_records is 0, history files are not split");
        }

        Self {
            workers,
            history_max_records,
        }
    }
}
