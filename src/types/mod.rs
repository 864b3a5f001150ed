//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `account`: Account state and identifiers
//! - `payment`: Payments, payment status and favorites
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod payment;

pub use account::{Account, AccountId, Money, Phone};
pub use error::{LedgerError, Result};
pub use payment::{Favorite, FavoriteId, Payment, PaymentCategory, PaymentId, PaymentStatus};
