//! I/O module
//!
//! Handles moving ledger state to and from flat files.
//!
//! # Components
//!
//! - `dump_format` - Delimited record format (encoding and positional decoding)
//! - `dump` - Entity files and export directories
//! - `history` - Payment history split across capped-size files

pub mod dump;
pub mod dump_format;
pub mod history;

pub use dump::{read_dump_dir, read_entity_file, write_dump_dir, write_entity_file, LedgerDump};
pub use dump_format::{decode_records, encode_records, DumpRecord};
pub use history::write_history;
