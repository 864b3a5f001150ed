//! Error types for the wallet ledger
//!
//! This module defines all error types that can occur while operating on the
//! ledger or moving its state to and from dump files.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: Duplicate phone, non-positive amount, insufficient balance,
//!   arithmetic overflow
//! - **Lookup Errors**: Unknown account, payment or favorite; empty query results
//! - **File I/O Errors**: Any failure to open, read or write a dump file
//! - **Decode Errors**: Malformed numbers, wrong field counts, unknown statuses

use super::account::{AccountId, Money};
use std::num::ParseIntError;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Main error type for the ledger
///
/// Every fallible ledger operation returns one of these variants. Nothing is
/// retried internally; the caller decides how to report the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Another account is already registered under this phone
    #[error("Phone already registered: {phone}")]
    PhoneAlreadyRegistered {
        /// The duplicated phone number
        phone: String,
    },

    /// Deposits and payments require a strictly positive amount
    #[error("Amount must be greater than zero, got {amount}")]
    AmountMustBePositive {
        /// The rejected amount
        amount: Money,
    },

    /// No account with this identifier exists
    ///
    /// Also returned when a query scoped to an account matches no payments.
    #[error("Account {account_id} not found")]
    AccountNotFound {
        /// The identifier that was looked up
        account_id: AccountId,
    },

    /// The account balance does not cover the requested payment
    #[error("Not enough balance on account {account_id}: balance {balance}, requested {requested}")]
    NotEnoughBalance {
        /// Account that was to be debited
        account_id: AccountId,
        /// Balance at the time of the attempt
        balance: Money,
        /// Requested payment amount
        requested: Money,
    },

    /// A balance change or payment total would not fit in `Money`
    ///
    /// The operation is rejected and no state is changed.
    #[error("Arithmetic overflow in {operation} for {subject}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// What was being updated, e.g. "account 3" or "payment log"
        subject: String,
    },

    /// No payment with this identifier exists
    #[error("Payment {payment_id} not found")]
    PaymentNotFound {
        /// The identifier that was looked up
        payment_id: String,
    },

    /// No favorite with this identifier exists
    #[error("Favorite {favorite_id} not found")]
    FavoriteNotFound {
        /// The identifier that was looked up
        favorite_id: String,
    },

    /// A predicate-based payment filter matched nothing
    #[error("No payments matched the filter")]
    NoMatchingPayments,

    /// A dump file could not be opened, read or written
    ///
    /// Every I/O failure maps to this one kind; `message` keeps the
    /// underlying cause.
    #[error("File not found: {path} ({message})")]
    FileNotFound {
        /// The path that failed
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// A numeric field in a dump record did not parse
    #[error("Invalid {field} '{value}': {source}")]
    ParseError {
        /// Name of the field being decoded
        field: String,
        /// Raw text of the field
        value: String,
        /// The underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// A dump record had the wrong number of fields
    #[error("Malformed record '{record}': expected {expected} fields, found {found}")]
    MalformedRecord {
        /// The offending record, fields re-joined with ';'
        record: String,
        /// Field count for this entity type
        expected: usize,
        /// Field count actually present
        found: usize,
    },

    /// A payment status field held an unknown value
    #[error("Invalid payment status '{value}'")]
    InvalidStatus {
        /// The unrecognised status text
        value: String,
    },

    /// The delimited reader or writer itself failed (e.g. invalid UTF-8)
    #[error("Dump codec error: {message}")]
    Codec {
        /// Description of the codec failure
        message: String,
    },

    /// Command output could not be written
    #[error("Failed to write output: {message}")]
    OutputFailed {
        /// Description of the underlying I/O error
        message: String,
    },
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::Codec {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a PhoneAlreadyRegistered error
    pub fn phone_already_registered(phone: &str) -> Self {
        LedgerError::PhoneAlreadyRegistered {
            phone: phone.to_string(),
        }
    }

    /// Create an AmountMustBePositive error
    pub fn amount_must_be_positive(amount: Money) -> Self {
        LedgerError::AmountMustBePositive { amount }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account_id: AccountId) -> Self {
        LedgerError::AccountNotFound { account_id }
    }

    /// Create a NotEnoughBalance error
    pub fn not_enough_balance(account_id: AccountId, balance: Money, requested: Money) -> Self {
        LedgerError::NotEnoughBalance {
            account_id,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error for an account balance change
    pub fn arithmetic_overflow(operation: &str, account_id: AccountId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            subject: format!("account {}", account_id),
        }
    }

    /// Create an ArithmeticOverflow error for the payment total
    pub fn sum_overflow() -> Self {
        LedgerError::ArithmeticOverflow {
            operation: "sum".to_string(),
            subject: "payment log".to_string(),
        }
    }

    /// Create a PaymentNotFound error
    pub fn payment_not_found(payment_id: &str) -> Self {
        LedgerError::PaymentNotFound {
            payment_id: payment_id.to_string(),
        }
    }

    /// Create a FavoriteNotFound error
    pub fn favorite_not_found(favorite_id: &str) -> Self {
        LedgerError::FavoriteNotFound {
            favorite_id: favorite_id.to_string(),
        }
    }

    /// Create a FileNotFound error from the failing path and I/O error
    pub fn file_not_found(path: &std::path::Path, error: &std::io::Error) -> Self {
        LedgerError::FileNotFound {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create an OutputFailed error from the failing write
    pub fn output_failed(error: &std::io::Error) -> Self {
        LedgerError::OutputFailed {
            message: error.to_string(),
        }
    }

    /// Create a ParseError for a numeric field
    pub fn parse_error(field: &str, value: &str, source: ParseIntError) -> Self {
        LedgerError::ParseError {
            field: field.to_string(),
            value: value.to_string(),
            source,
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(record: &str, expected: usize, found: usize) -> Self {
        LedgerError::MalformedRecord {
            record: record.to_string(),
            expected,
            found,
        }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(value: &str) -> Self {
        LedgerError::InvalidStatus {
            value: value.to_string(),
        }
    }
}
