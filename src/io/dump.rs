//! Dump files: whole-ledger export and import
//!
//! Provides file-level entry points over the delimited format in
//! [`dump_format`](super::dump_format):
//!
//! - A single entity file at a caller-chosen path (`write_entity_file` /
//!   `read_entity_file`)
//! - An export directory holding `accounts.dump`, `payments.dump` and
//!   `favorites.dump` (`write_dump_dir` / `read_dump_dir`)
//!
//! # Error Handling
//!
//! Every I/O failure is logged and surfaced as `FileNotFound`, carrying the
//! underlying message. Decode failures are returned as-is.

use super::dump_format::{decode_records, encode_records, DumpRecord, RECORD_TERMINATOR};
use crate::types::{Account, Favorite, LedgerError, Payment, Result};
use log::{debug, error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Entities decoded from an export directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerDump {
    pub accounts: Vec<Account>,
    pub payments: Vec<Payment>,
    pub favorites: Vec<Favorite>,
}

/// Write `records` to `path`, replacing any existing file
///
/// An empty list produces an empty file.
pub fn write_entity_file<T: DumpRecord>(path: &Path, records: &[T]) -> Result<()> {
    let data = encode_records(records, RECORD_TERMINATOR)?;
    fs::write(path, data).map_err(|e| io_failure(path, e))?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read and decode every record in `path`
///
/// # Errors
///
/// - `FileNotFound` if the file cannot be read
/// - Any decode error from [`decode_records`]
pub fn read_entity_file<T: DumpRecord>(path: &Path) -> Result<Vec<T>> {
    let data = fs::read(path).map_err(|e| io_failure(path, e))?;
    decode_records(&data)
}

/// Export all three entity lists into `dir`
///
/// An entity file is only written when its list is non-empty. The directory
/// must already exist.
pub fn write_dump_dir(
    dir: &Path,
    accounts: &[Account],
    payments: &[Payment],
    favorites: &[Favorite],
) -> Result<()> {
    write_if_any(dir, accounts)?;
    write_if_any(dir, payments)?;
    write_if_any(dir, favorites)?;
    Ok(())
}

/// Decode whichever entity files are present in `dir`
///
/// Each file is optional; a missing one contributes an empty list. Nothing is
/// returned unless every present file decodes cleanly.
pub fn read_dump_dir(dir: &Path) -> Result<LedgerDump> {
    Ok(LedgerDump {
        accounts: read_if_present(dir)?,
        payments: read_if_present(dir)?,
        favorites: read_if_present(dir)?,
    })
}

fn write_if_any<T: DumpRecord>(dir: &Path, records: &[T]) -> Result<()> {
    if records.is_empty() {
        debug!("No records for {}, skipping", T::FILE_NAME);
        return Ok(());
    }
    write_entity_file(&dir.join(T::FILE_NAME), records)
}

fn read_if_present<T: DumpRecord>(dir: &Path) -> Result<Vec<T>> {
    let path = dir.join(T::FILE_NAME);
    match fs::read(&path) {
        Ok(data) => decode_records(&data),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} not present, skipping", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(io_failure(&path, e)),
    }
}

pub(crate) fn io_failure(path: &Path, e: std::io::Error) -> LedgerError {
    error!("{}: {}", path.display(), e);
    LedgerError::file_not_found(path, &e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use tempfile::TempDir;

    fn sample_dump() -> LedgerDump {
        LedgerDump {
            accounts: vec![Account {
                id: 1,
                phone: "+992000000001".to_string(),
                balance: 9000,
            }],
            payments: vec![Payment {
                id: "p-1".to_string(),
                account_id: 1,
                amount: 1000,
                category: "auto".to_string(),
                status: PaymentStatus::InProgress,
            }],
            favorites: vec![Favorite {
                id: "f-1".to_string(),
                account_id: 1,
                name: "Car".to_string(),
                amount: 1000,
                category: "auto".to_string(),
            }],
        }
    }

    #[test]
    fn test_entity_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.blob");
        let dump = sample_dump();

        write_entity_file(&path, &dump.accounts).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1;+992000000001;9000|"
        );
        assert_eq!(read_entity_file::<Account>(&path).unwrap(), dump.accounts);
    }

    #[test]
    fn test_read_missing_entity_file() {
        let dir = TempDir::new().unwrap();
        let result = read_entity_file::<Account>(&dir.path().join("missing.dump"));

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let dump = sample_dump();
        let result = write_dump_dir(
            &dir.path().join("nope"),
            &dump.accounts,
            &dump.payments,
            &dump.favorites,
        );

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_dump_dir_round_trip() {
        let dir = TempDir::new().unwrap();
        let dump = sample_dump();

        write_dump_dir(dir.path(), &dump.accounts, &dump.payments, &dump.favorites).unwrap();

        assert_eq!(read_dump_dir(dir.path()).unwrap(), dump);
    }

    #[test]
    fn test_empty_lists_are_not_written() {
        let dir = TempDir::new().unwrap();
        let dump = sample_dump();

        write_dump_dir(dir.path(), &dump.accounts, &[], &[]).unwrap();

        assert!(dir.path().join("accounts.dump").exists());
        assert!(!dir.path().join("payments.dump").exists());
        assert!(!dir.path().join("favorites.dump").exists());
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("payments.dump"), "p-9;4;70;food;FAIL|").unwrap();

        let dump = read_dump_dir(dir.path()).unwrap();

        assert!(dump.accounts.is_empty());
        assert!(dump.favorites.is_empty());
        assert_eq!(dump.payments.len(), 1);
        assert_eq!(dump.payments[0].status, PaymentStatus::Fail);
    }

    #[test]
    fn test_malformed_file_fails_whole_read() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("accounts.dump"), "1;+992000000001;10|").unwrap();
        fs::write(dir.path().join("favorites.dump"), "f;x;name;1;cat|").unwrap();

        let result = read_dump_dir(dir.path());

        assert!(matches!(result, Err(LedgerError::ParseError { .. })));
    }
}
