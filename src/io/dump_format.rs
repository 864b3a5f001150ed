//! Delimited record format for dump and history files
//!
//! This module centralizes the flat-file format, providing:
//! - The `DumpRecord` trait tying each entity to its file name and field layout
//! - Encoding of entity lists into delimited bytes
//! - Positional decoding of delimited bytes back into entities
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Format
//!
//! ```text
//! 1;+992000000001;9000|2;+992000000002;0|
//! ```
//!
//! Fields are separated by `;` and every record is terminated by `|` (dump
//! files) or `\n` (history files). Fields are written verbatim: a `;` or a
//! terminator inside a phone, category or name cannot be represented.
//!
//! | Entity   | Fields                                  |
//! |----------|-----------------------------------------|
//! | Account  | `id;phone;balance`                      |
//! | Payment  | `id;accountID;amount;category;status`   |
//! | Favorite | `id;accountID;name;amount;category`     |

use crate::types::{Account, Favorite, LedgerError, Payment, Result};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde::Serialize;

/// Separator between the fields of one record
pub const FIELD_DELIMITER: u8 = b';';

/// Record terminator used by dump files
pub const RECORD_TERMINATOR: u8 = b'|';

/// Record terminator used by history files
pub const HISTORY_TERMINATOR: u8 = b'\n';

/// An entity that can be stored in a dump file
///
/// Encoding goes through `Serialize`, so the struct's field declaration order
/// is the column order. Decoding is positional and must agree with it.
pub trait DumpRecord: Serialize + Sized {
    /// File name used inside an export directory
    const FILE_NAME: &'static str;

    /// Number of fields per record
    const FIELD_COUNT: usize;

    /// Build the entity from one decoded record
    ///
    /// The caller has already checked the field count.
    fn from_fields(record: &StringRecord) -> Result<Self>;
}

impl DumpRecord for Account {
    const FILE_NAME: &'static str = "accounts.dump";
    const FIELD_COUNT: usize = 3;

    fn from_fields(record: &StringRecord) -> Result<Self> {
        Ok(Account {
            id: parse_int(record, 0, "account id")?,
            phone: record[1].to_string(),
            balance: parse_int(record, 2, "balance")?,
        })
    }
}

impl DumpRecord for Payment {
    const FILE_NAME: &'static str = "payments.dump";
    const FIELD_COUNT: usize = 5;

    fn from_fields(record: &StringRecord) -> Result<Self> {
        Ok(Payment {
            id: record[0].to_string(),
            account_id: parse_int(record, 1, "account id")?,
            amount: parse_int(record, 2, "amount")?,
            category: record[3].to_string(),
            status: record[4].parse()?,
        })
    }
}

impl DumpRecord for Favorite {
    const FILE_NAME: &'static str = "favorites.dump";
    const FIELD_COUNT: usize = 5;

    fn from_fields(record: &StringRecord) -> Result<Self> {
        Ok(Favorite {
            id: record[0].to_string(),
            account_id: parse_int(record, 1, "account id")?,
            name: record[2].to_string(),
            amount: parse_int(record, 3, "amount")?,
            category: record[4].to_string(),
        })
    }
}

/// Encode records with the given terminator
///
/// # Arguments
///
/// * `records` - Entities to encode, in output order
/// * `terminator` - `RECORD_TERMINATOR` for dumps, `HISTORY_TERMINATOR` for history
pub fn encode_records<T: Serialize>(records: &[T], terminator: u8) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(FIELD_DELIMITER)
        .terminator(Terminator::Any(terminator))
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    writer.into_inner().map_err(|e| LedgerError::Codec {
        message: e.error().to_string(),
    })
}

/// Decode `|`-terminated records into entities
///
/// Empty segments are skipped wherever they occur: after the final `|` and
/// between two consecutive terminators. A trailing segment with no `|` is
/// decoded as a record. The first bad record aborts decoding.
///
/// # Errors
///
/// - `MalformedRecord` if a record has the wrong number of fields
/// - `ParseError` if a numeric field is not an integer
/// - `InvalidStatus` if a payment status is unknown
/// - `Codec` if the data is not valid UTF-8
pub fn decode_records<T: DumpRecord>(data: &[u8]) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(FIELD_DELIMITER)
        .terminator(Terminator::Any(RECORD_TERMINATOR))
        .quoting(false)
        .flexible(true)
        .from_reader(data);

    reader
        .records()
        .map(|record| {
            let record = record?;
            if record.len() != T::FIELD_COUNT {
                let joined = record.iter().collect::<Vec<_>>().join(";");
                return Err(LedgerError::malformed_record(
                    &joined,
                    T::FIELD_COUNT,
                    record.len(),
                ));
            }
            T::from_fields(&record)
        })
        .collect()
}

fn parse_int(record: &StringRecord, index: usize, field: &str) -> Result<i64> {
    let value = &record[index];
    value
        .parse()
        .map_err(|e| LedgerError::parse_error(field, value, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use rstest::rstest;

    fn account(id: i64, phone: &str, balance: i64) -> Account {
        Account {
            id,
            phone: phone.to_string(),
            balance,
        }
    }

    fn payment(id: &str, account_id: i64, amount: i64, status: PaymentStatus) -> Payment {
        Payment {
            id: id.to_string(),
            account_id,
            amount,
            category: "auto".to_string(),
            status,
        }
    }

    #[test]
    fn test_encode_accounts() {
        let accounts = vec![
            account(1, "+992000000001", 9000),
            account(2, "+992000000002", -15),
        ];

        let encoded = encode_records(&accounts, RECORD_TERMINATOR).unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            "1;+992000000001;9000|2;+992000000002;-15|"
        );
    }

    #[test]
    fn test_encode_payments_with_history_terminator() {
        let payments = vec![
            payment("a", 1, 100, PaymentStatus::InProgress),
            payment("b", 2, 5, PaymentStatus::Fail),
        ];

        let encoded = encode_records(&payments, HISTORY_TERMINATOR).unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            "a;1;100;auto;INPROGRESS\nb;2;5;auto;FAIL\n"
        );
    }

    #[test]
    fn test_encode_favorite_field_order() {
        let favorite = Favorite {
            id: "f".to_string(),
            account_id: 3,
            name: "Mobile".to_string(),
            amount: 50,
            category: "phone".to_string(),
        };

        let encoded = encode_records(&[favorite], RECORD_TERMINATOR).unwrap();
        assert_eq!(String::from_utf8(encoded).unwrap(), "f;3;Mobile;50;phone|");
    }

    #[test]
    fn test_encode_empty_list() {
        let encoded = encode_records::<Account>(&[], RECORD_TERMINATOR).unwrap();
        assert!(encoded.is_empty());
    }

    #[test]
    fn test_decode_accounts() {
        let data = b"1;+992000000001;9000|2;+992000000002;0|";
        let decoded: Vec<Account> = decode_records(data).unwrap();

        assert_eq!(
            decoded,
            vec![
                account(1, "+992000000001", 9000),
                account(2, "+992000000002", 0)
            ]
        );
    }

    #[test]
    fn test_decode_payments_with_empty_category() {
        let decoded: Vec<Payment> = decode_records(b"x;1;10;;OK|").unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].category, "");
        assert_eq!(decoded[0].status, PaymentStatus::Ok);
    }

    #[rstest]
    #[case::empty(b"")]
    #[case::only_terminators(b"||")]
    fn test_decode_nothing(#[case] data: &[u8]) {
        let decoded: Vec<Account> = decode_records(data).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_unterminated_last_record() {
        let data = b"1;+992000000001;9000|2;+992000000002;7";
        let decoded: Vec<Account> = decode_records(data).unwrap();

        assert_eq!(
            decoded,
            vec![
                account(1, "+992000000001", 9000),
                account(2, "+992000000002", 7)
            ]
        );
    }

    #[test]
    fn test_decode_skips_empty_segment_between_records() {
        let decoded: Vec<Account> = decode_records(b"1;a;5||2;b;6|").unwrap();

        assert_eq!(decoded, vec![account(1, "a", 5), account(2, "b", 6)]);
    }

    #[test]
    fn test_decode_bad_number_reports_parse_error() {
        let result: Result<Vec<Account>> = decode_records(b"1;+992000000001;9000|2;+992;lots|");

        let source = "lots".parse::<i64>().unwrap_err();
        assert_eq!(
            result,
            Err(LedgerError::parse_error("balance", "lots", source))
        );
    }

    #[rstest]
    #[case::too_few(b"1;+992|", "1;+992", 2)]
    #[case::too_many(b"1;+992;5;extra|", "1;+992;5;extra", 4)]
    fn test_decode_wrong_field_count(
        #[case] data: &[u8],
        #[case] record: &str,
        #[case] found: usize,
    ) {
        let result: Result<Vec<Account>> = decode_records(data);
        assert_eq!(result, Err(LedgerError::malformed_record(record, 3, found)));
    }

    #[test]
    fn test_decode_unknown_status() {
        let result: Result<Vec<Payment>> = decode_records(b"x;1;10;auto;DONE|");
        assert_eq!(result, Err(LedgerError::invalid_status("DONE")));
    }

    #[test]
    fn test_decode_favorites() {
        let decoded: Vec<Favorite> = decode_records(b"f;3;Mobile;50;phone|").unwrap();

        assert_eq!(decoded[0].name, "Mobile");
        assert_eq!(decoded[0].amount, 50);
        assert_eq!(decoded[0].category, "phone");
    }
}
