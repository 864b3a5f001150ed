//! Wallet Ledger Library
//! # Overview
//!
//! This library provides an in-memory wallet ledger with a partitioned,
//! multi-threaded query engine and a flat-file dump format.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Payment, Favorite, errors)
//! - [`config`] - Worker count and history chunk size defaults
//! - [`cli`] - CLI arguments parsing and command execution
//! - [`core`] - Ledger store:
//!   - [`core::ledger`] - Accounts, payments, favorites and their operations
//!   - [`core::ids`] - Identifier sources for payments and favorites
//! - [`query`] - Sum and filter over the payment log across worker threads
//! - [`io`] - Dump files and payment history export
//!
//! # Operations
//!
//! - **Register**: Create an account for a unique phone number
//! - **Deposit**: Credit an account
//! - **Pay**: Debit an account and record an in-progress payment
//! - **Reject**: Fail a payment and refund its amount
//! - **Repeat**: Pay again with the details of an earlier payment
//! - **Favorite**: Save a payment as a template and pay from it later
//!
//! # Dump Files
//!
//! An export directory holds `accounts.dump`, `payments.dump` and
//! `favorites.dump`, each a sequence of `;`-separated, `|`-terminated records.
//! Payment histories use the same fields with `\n` terminators.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod query;
pub mod types;

pub use config::EngineConfig;
pub use crate::core::{IdGenerator, Ledger, SequentialIdGenerator, UuidGenerator};
pub use io::write_history;
pub use types::{
    Account, AccountId, Favorite, LedgerError, Money, Payment, PaymentStatus, Result,
};
