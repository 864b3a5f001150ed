//! Payment history export
//!
//! Writes a list of payments as newline-terminated records, either to a
//! single `payments.dump` or split over `payments1.dump`, `payments2.dump`, …
//! when the list is longer than the per-file cap.

use super::dump::io_failure;
use super::dump_format::{encode_records, HISTORY_TERMINATOR};
use crate::types::{Payment, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

const HISTORY_STEM: &str = "payments";

/// Write `payments` into `dir`, at most `max_records` per file
///
/// - Empty list: nothing is written
/// - `len <= max_records`, or `max_records == 0` (no cap): `payments.dump`
/// - Otherwise: `payments1.dump` … `paymentsK.dump`, each full except the last
///
/// Each file is created, written and closed before the next one is opened.
/// Existing files with the same names are overwritten.
///
/// # Returns
///
/// The paths written, in order.
pub fn write_history(payments: &[Payment], dir: &Path, max_records: usize) -> Result<Vec<PathBuf>> {
    if payments.is_empty() {
        return Ok(Vec::new());
    }

    if max_records == 0 || payments.len() <= max_records {
        let path = dir.join(format!("{}.dump", HISTORY_STEM));
        write_chunk(&path, payments)?;
        return Ok(vec![path]);
    }

    let mut written = Vec::new();
    for (index, chunk) in payments.chunks(max_records).enumerate() {
        let path = dir.join(format!("{}{}.dump", HISTORY_STEM, index + 1));
        write_chunk(&path, chunk)?;
        written.push(path);
    }

    info!(
        "Split {} payments into {} history files",
        payments.len(),
        written.len()
    );
    Ok(written)
}

fn write_chunk(path: &Path, chunk: &[Payment]) -> Result<()> {
    let data = encode_records(chunk, HISTORY_TERMINATOR)?;
    fs::write(path, data).map_err(|e| io_failure(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LedgerError, PaymentStatus};
    use rstest::rstest;
    use tempfile::TempDir;

    fn history(len: usize) -> Vec<Payment> {
        (1..=len)
            .map(|i| Payment {
                id: format!("p-{}", i),
                account_id: 1,
                amount: i as i64 * 100,
                category: "auto".to_string(),
                status: PaymentStatus::InProgress,
            })
            .collect()
    }

    fn line_count(path: &Path) -> usize {
        fs::read_to_string(path).unwrap().lines().count()
    }

    #[rstest]
    #[case::fits_exactly(4, 4)]
    #[case::below_cap(3, 10)]
    #[case::no_cap(25, 0)]
    fn test_single_file(#[case] len: usize, #[case] max_records: usize) {
        let dir = TempDir::new().unwrap();

        let written = write_history(&history(len), dir.path(), max_records).unwrap();

        assert_eq!(written, vec![dir.path().join("payments.dump")]);
        assert_eq!(line_count(&written[0]), len);
    }

    #[test]
    fn test_single_file_content() {
        let dir = TempDir::new().unwrap();

        write_history(&history(2), dir.path(), 5).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("payments.dump")).unwrap(),
            "p-1;1;100;auto;INPROGRESS\np-2;1;200;auto;INPROGRESS\n"
        );
    }

    #[rstest]
    #[case::eleven_by_four(11, 4, vec![4, 4, 3])]
    #[case::even_split(6, 3, vec![3, 3])]
    #[case::one_per_file(3, 1, vec![1, 1, 1])]
    fn test_chunked_files(
        #[case] len: usize,
        #[case] max_records: usize,
        #[case] expected_counts: Vec<usize>,
    ) {
        let dir = TempDir::new().unwrap();

        let written = write_history(&history(len), dir.path(), max_records).unwrap();

        let expected_paths: Vec<PathBuf> = (1..=expected_counts.len())
            .map(|i| dir.path().join(format!("payments{}.dump", i)))
            .collect();
        assert_eq!(written, expected_paths);

        let counts: Vec<usize> = written.iter().map(|p| line_count(p)).collect();
        assert_eq!(counts, expected_counts);
        assert!(!dir.path().join("payments.dump").exists());
    }

    #[test]
    fn test_chunks_keep_order() {
        let dir = TempDir::new().unwrap();

        write_history(&history(5), dir.path(), 2).unwrap();

        let last = fs::read_to_string(dir.path().join("payments3.dump")).unwrap();
        assert_eq!(last, "p-5;1;500;auto;INPROGRESS\n");
    }

    #[test]
    fn test_empty_history_writes_nothing() {
        let dir = TempDir::new().unwrap();

        let written = write_history(&[], dir.path(), 4).unwrap();

        assert!(written.is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();

        let result = write_history(&history(2), &dir.path().join("missing"), 4);

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }
}
