//! Account-related types for the wallet ledger
//!
//! This module defines the Account structure together with the identifier
//! and currency aliases shared by the rest of the crate.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned monotonically by the ledger, starting at 1.
pub type AccountId = i64;

/// Amount of money in the smallest currency unit
pub type Money = i64;

/// Phone number used as the human-facing account key
pub type Phone = String;

/// Wallet account state
///
/// Field order matters: it is the column order of `accounts.dump`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Ledger-assigned identifier
    pub id: AccountId,

    /// Phone number, unique among registered accounts
    pub phone: Phone,

    /// Current balance
    ///
    /// Increased by deposits and rejected payments, decreased by payments.
    /// A payment never drives it below zero.
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier assigned by the ledger
    /// * `phone` - The phone number the account is registered under
    pub fn new(id: AccountId, phone: impl Into<Phone>) -> Self {
        Account {
            id,
            phone: phone.into(),
            balance: 0,
        }
    }
}
