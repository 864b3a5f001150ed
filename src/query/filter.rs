//! Partitioned payment filter
//!
//! Matches are merged chunk by chunk as workers finish, so the returned order
//! does not follow the order of the payment log once more than one worker is
//! involved. Callers that need an order must sort the result.

use super::partition;
use crate::types::Payment;
use log::debug;
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Collect copies of the payments accepted by `predicate`
///
/// With `workers < 2` the slice is scanned on the calling thread and the
/// result keeps log order. Otherwise the slice is split by [`partition`] and
/// each worker appends its local matches to the shared result under one lock.
/// An empty result is returned as an empty vector; deciding whether that is
/// an error is left to the caller.
pub fn filter<F>(payments: &[Payment], predicate: F, workers: usize) -> Vec<Payment>
where
    F: Fn(&Payment) -> bool + Sync,
{
    if workers < 2 {
        return payments
            .iter()
            .filter(|&payment| predicate(payment))
            .cloned()
            .collect();
    }

    debug!(
        "Filtering {} payments across {} workers",
        payments.len(),
        workers
    );

    let matches = Mutex::new(Vec::new());
    let predicate = &predicate;

    thread::scope(|scope| {
        for range in partition(payments.len(), workers) {
            let chunk = &payments[range];
            let matches = &matches;
            scope.spawn(move || {
                let local: Vec<Payment> = chunk
                    .iter()
                    .filter(|&payment| predicate(payment))
                    .cloned()
                    .collect();
                matches
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .extend(local);
            });
        }
    });

    matches.into_inner().unwrap_or_else(PoisonError::into_inner)
}
