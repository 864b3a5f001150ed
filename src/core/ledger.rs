//! Ledger store
//!
//! This module provides the `Ledger` struct which owns every account, payment
//! and favorite, along with the account identifier counter and the
//! identifier source for payments and favorites.
//!
//! The Ledger is responsible for:
//! - Registering accounts and keeping phone numbers unique
//! - Applying deposits, payments, rejects and repeats to balances
//! - Saving payments as favorites and paying from them
//! - Fanning payment queries out to the partitioned query engine
//! - Moving its state to and from dump files
//!
//! # Lookup
//!
//! All three collections are plain vectors searched linearly by identifier,
//! so lookups are O(n).
//!
//! # Query Snapshots
//!
//! Queries borrow the ledger immutably for their whole duration, so the payment
//! log cannot be appended to while workers are reading it.

use super::ids::UuidGenerator;
use super::traits::IdGenerator;
use crate::io::dump::{self, LedgerDump};
use crate::query;
use crate::types::{
    Account, AccountId, Favorite, LedgerError, Money, Payment, PaymentStatus, Result,
};
use log::debug;
use std::path::Path;

/// In-memory wallet ledger
#[derive(Debug)]
pub struct Ledger<G: IdGenerator = UuidGenerator> {
    /// Last account identifier handed out; the next registration gets +1
    last_account_id: AccountId,

    /// Accounts in registration/import order
    accounts: Vec<Account>,

    /// Payment log in creation/import order
    payments: Vec<Payment>,

    /// Favorites in creation/import order
    favorites: Vec<Favorite>,

    /// Identifier source for payments and favorites
    ids: G,
}

impl Ledger<UuidGenerator> {
    /// Create an empty ledger that mints UUID identifiers
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl Default for Ledger<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Ledger<G> {
    /// Create an empty ledger with a caller-supplied identifier source
    ///
    /// # Arguments
    ///
    /// * `ids` - Generator used for every new payment and favorite identifier
    pub fn with_id_generator(ids: G) -> Self {
        Ledger {
            last_account_id: 0,
            accounts: Vec::new(),
            payments: Vec::new(),
            favorites: Vec::new(),
            ids,
        }
    }

    /// All accounts, in registration/import order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The payment log, in creation/import order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// All favorites, in creation/import order
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Register a new account under a phone number
    ///
    /// The account gets the next identifier and a zero balance.
    ///
    /// # Errors
    ///
    /// Returns `PhoneAlreadyRegistered` if any account already uses `phone`.
    pub fn register_account(&mut self, phone: &str) -> Result<Account> {
        if self.accounts.iter().any(|account| account.phone == phone) {
            return Err(LedgerError::phone_already_registered(phone));
        }

        self.last_account_id += 1;
        let account = Account::new(self.last_account_id, phone);
        self.accounts.push(account.clone());

        debug!("Registered account {} for {}", account.id, phone);
        Ok(account)
    }

    /// Credit an account
    ///
    /// # Errors
    ///
    /// - `AmountMustBePositive` if `amount <= 0`
    /// - `AccountNotFound` if no account has `account_id`
    /// - `ArithmeticOverflow` if the new balance would not fit; the balance is
    ///   left untouched
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<()> {
        if amount <= 0 {
            return Err(LedgerError::amount_must_be_positive(amount));
        }

        let account = self.find_account_mut(account_id)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account_id))?;
        Ok(())
    }

    /// Debit an account and record an `InProgress` payment
    ///
    /// Checks run in order: amount, account existence, balance. On failure the
    /// account balance is left untouched.
    ///
    /// # Errors
    ///
    /// - `AmountMustBePositive` if `amount <= 0`
    /// - `AccountNotFound` if no account has `account_id`
    /// - `NotEnoughBalance` if the balance is below `amount`
    pub fn pay(&mut self, account_id: AccountId, amount: Money, category: &str) -> Result<Payment> {
        if amount <= 0 {
            return Err(LedgerError::amount_must_be_positive(amount));
        }

        let account = self.find_account_mut(account_id)?;
        if account.balance < amount {
            return Err(LedgerError::not_enough_balance(
                account_id,
                account.balance,
                amount,
            ));
        }
        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("pay", account_id))?;

        let payment = Payment {
            id: self.ids.next_id(),
            account_id,
            amount,
            category: category.to_string(),
            status: PaymentStatus::InProgress,
        };
        self.payments.push(payment.clone());

        debug!("Payment {} of {} from account {}", payment.id, amount, account_id);
        Ok(payment)
    }

    /// Look up an account by identifier
    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|account| account.id == account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    fn find_account_mut(&mut self, account_id: AccountId) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.id == account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    /// Look up a payment by identifier
    pub fn find_payment_by_id(&self, payment_id: &str) -> Result<&Payment> {
        self.payments
            .iter()
            .find(|payment| payment.id == payment_id)
            .ok_or_else(|| LedgerError::payment_not_found(payment_id))
    }

    /// Look up a favorite by identifier
    pub fn find_favorite_by_id(&self, favorite_id: &str) -> Result<&Favorite> {
        self.favorites
            .iter()
            .find(|favorite| favorite.id == favorite_id)
            .ok_or_else(|| LedgerError::favorite_not_found(favorite_id))
    }

    /// Reject a payment, refunding its amount to the owning account
    ///
    /// The payment moves to `Fail`. Rejecting a payment that is already `Fail`
    /// does nothing, so the refund is applied at most once.
    ///
    /// # Errors
    ///
    /// - `PaymentNotFound` if no payment has `payment_id`
    /// - `AccountNotFound` if the owning account is missing (only possible
    ///   with imported data); the payment is left unchanged
    /// - `ArithmeticOverflow` if the refund would not fit in the balance; the
    ///   payment and the balance are left unchanged
    pub fn reject(&mut self, payment_id: &str) -> Result<()> {
        let index = self
            .payments
            .iter()
            .position(|payment| payment.id == payment_id)
            .ok_or_else(|| LedgerError::payment_not_found(payment_id))?;

        let (account_id, amount, status) = {
            let payment = &self.payments[index];
            (payment.account_id, payment.amount, payment.status)
        };
        if status == PaymentStatus::Fail {
            debug!("Payment {} already rejected", payment_id);
            return Ok(());
        }

        let account = self.find_account_mut(account_id)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("refund", account_id))?;
        self.payments[index].status = PaymentStatus::Fail;

        debug!("Rejected payment {}, refunded {} to account {}", payment_id, amount, account_id);
        Ok(())
    }

    /// Pay again with the account, amount and category of an earlier payment
    ///
    /// The new payment goes through the normal pay path and gets its own
    /// identifier.
    pub fn repeat(&mut self, payment_id: &str) -> Result<Payment> {
        let original = self.find_payment_by_id(payment_id)?;
        let (account_id, amount, category) = (
            original.account_id,
            original.amount,
            original.category.clone(),
        );

        self.pay(account_id, amount, &category)
    }

    /// Save a payment as a named favorite
    pub fn favorite_payment(&mut self, payment_id: &str, name: &str) -> Result<Favorite> {
        let payment = self.find_payment_by_id(payment_id)?;
        let (account_id, amount, category) =
            (payment.account_id, payment.amount, payment.category.clone());

        let favorite = Favorite {
            id: self.ids.next_id(),
            account_id,
            name: name.to_string(),
            amount,
            category,
        };
        self.favorites.push(favorite.clone());

        Ok(favorite)
    }

    /// Make a new payment from a favorite's saved account, amount and category
    pub fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment> {
        let favorite = self.find_favorite_by_id(favorite_id)?;
        let (account_id, amount, category) = (
            favorite.account_id,
            favorite.amount,
            favorite.category.clone(),
        );

        self.pay(account_id, amount, &category)
    }

    /// Collect every payment made from an account, in log order
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account has no payments.
    pub fn export_account_history(&self, account_id: AccountId) -> Result<Vec<Payment>> {
        let history: Vec<Payment> = self
            .payments
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .cloned()
            .collect();

        if history.is_empty() {
            return Err(LedgerError::account_not_found(account_id));
        }
        Ok(history)
    }

    /// Sum all payment amounts using `workers` threads
    ///
    /// See [`query::sum_amounts`] for the partitioning rules.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the total does not fit in `Money`.
    pub fn sum_payments(&self, workers: usize) -> Result<Money> {
        query::sum_amounts(&self.payments, workers)
    }

    /// Collect the payments of one account using `workers` threads
    ///
    /// The order of the returned payments is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if nothing matched.
    pub fn filter_payments(&self, account_id: AccountId, workers: usize) -> Result<Vec<Payment>> {
        let matches = query::filter(
            &self.payments,
            |payment| payment.account_id == account_id,
            workers,
        );

        if matches.is_empty() {
            return Err(LedgerError::account_not_found(account_id));
        }
        Ok(matches)
    }

    /// Collect the payments accepted by `predicate` using `workers` threads
    ///
    /// The order of the returned payments is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns `NoMatchingPayments` if nothing matched.
    pub fn filter_payments_by<F>(&self, predicate: F, workers: usize) -> Result<Vec<Payment>>
    where
        F: Fn(&Payment) -> bool + Sync,
    {
        let matches = query::filter(&self.payments, predicate, workers);

        if matches.is_empty() {
            return Err(LedgerError::NoMatchingPayments);
        }
        Ok(matches)
    }

    /// Write the account list to a single dump file
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        dump::write_entity_file(path, &self.accounts)
    }

    /// Append the accounts stored in a single dump file
    pub fn import_from_file(&mut self, path: &Path) -> Result<()> {
        let accounts = dump::read_entity_file::<Account>(path)?;
        self.absorb(LedgerDump {
            accounts,
            ..LedgerDump::default()
        });
        Ok(())
    }

    /// Write accounts, payments and favorites into `dir`
    ///
    /// Entity files whose list is empty are not written.
    pub fn export(&self, dir: &Path) -> Result<()> {
        dump::write_dump_dir(dir, &self.accounts, &self.payments, &self.favorites)
    }

    /// Append whatever entity files are present in `dir`
    ///
    /// Missing files are skipped. All present files are decoded before any
    /// record is appended: a malformed file leaves the ledger unchanged.
    /// Importing the same directory twice appends its records twice.
    pub fn import(&mut self, dir: &Path) -> Result<()> {
        let dump = dump::read_dump_dir(dir)?;
        self.absorb(dump);
        Ok(())
    }

    fn absorb(&mut self, dump: LedgerDump) {
        if let Some(max_id) = dump.accounts.iter().map(|account| account.id).max() {
            self.last_account_id = self.last_account_id.max(max_id);
        }

        debug!(
            "Importing {} accounts, {} payments, {} favorites",
            dump.accounts.len(),
            dump.payments.len(),
            dump.favorites.len()
        );
        self.accounts.extend(dump.accounts);
        self.payments.extend(dump.payments);
        self.favorites.extend(dump.favorites);
    }
}
