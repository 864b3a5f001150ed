//! Payment-related types for the wallet ledger
//!
//! This module defines payments, their lifecycle status, and favorites
//! (saved payment templates).

use super::account::{AccountId, Money};
use super::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment identifier, minted by the ledger's identifier source
pub type PaymentId = String;

/// Favorite identifier, minted by the ledger's identifier source
pub type FavoriteId = String;

/// Free-form payment category tag (e.g. "auto", "food")
pub type PaymentCategory = String;

/// Lifecycle status of a payment
///
/// Payments are created `InProgress`. Rejecting a payment moves it to `Fail`.
/// Nothing in the ledger moves a payment to `Ok`; the variant exists so dumps
/// produced elsewhere can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Completed successfully
    Ok,

    /// Rejected; the amount has been refunded
    Fail,

    /// Debited from the account, not yet settled
    InProgress,
}

impl PaymentStatus {
    /// Dump-file spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Ok => "OK",
            PaymentStatus::Fail => "FAIL",
            PaymentStatus::InProgress => "INPROGRESS",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(PaymentStatus::Ok),
            "FAIL" => Ok(PaymentStatus::Fail),
            "INPROGRESS" => Ok(PaymentStatus::InProgress),
            other => Err(LedgerError::invalid_status(other)),
        }
    }
}

/// A single payment made from an account
///
/// Field order matters: it is the column order of `payments.dump` and of
/// the history files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Globally unique payment identifier
    pub id: PaymentId,

    /// The account the amount was debited from
    pub account_id: AccountId,

    /// Debited amount, always positive
    pub amount: Money,

    /// Category tag given at payment time
    pub category: PaymentCategory,

    /// Current lifecycle status
    pub status: PaymentStatus,
}

/// A saved payment template
///
/// Paying from a favorite creates a brand-new payment with a fresh
/// identifier; it is not a replay of the payment the favorite was made from.
///
/// Field order matters: it is the column order of `favorites.dump`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,
    /// Display name chosen by the caller
    pub name: String,
    pub amount: Money,
    pub category: PaymentCategory,
}
