//! Partitioned sum of payment amounts

use super::partition;
use crate::types::{LedgerError, Money, Payment, Result};
use log::debug;
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Sum the amounts of `payments` across `workers` threads
///
/// `workers == 0` runs a single worker over the whole slice. Otherwise the
/// slice is split by [`partition`] and every chunk, including empty ones,
/// gets its own thread. Partial sums are merged into one mutex-guarded
/// total, one lock per worker. The result does not depend on `workers`.
///
/// Partial sums are accumulated as `i128`, which cannot overflow for any
/// slice that fits in memory, so overflow is only possible in the final
/// narrowing to `Money`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the total does not fit in `Money`.
pub fn sum_amounts(payments: &[Payment], workers: usize) -> Result<Money> {
    let ranges = partition(payments.len(), workers);
    debug!(
        "Summing {} payments across {} workers",
        payments.len(),
        ranges.len()
    );

    let total = Mutex::new(0i128);

    thread::scope(|scope| {
        for range in ranges {
            let chunk = &payments[range];
            let total = &total;
            scope.spawn(move || {
                let partial: i128 = chunk.iter().map(|payment| i128::from(payment.amount)).sum();
                *total.lock().unwrap_or_else(PoisonError::into_inner) += partial;
            });
        }
    });

    let total = total.into_inner().unwrap_or_else(PoisonError::into_inner);
    Money::try_from(total).map_err(|_| LedgerError::sum_overflow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use rstest::rstest;

    fn payments_with_amounts(amounts: &[Money]) -> Vec<Payment> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| Payment {
                id: format!("p-{}", i),
                account_id: (i % 3) as i64 + 1,
                amount,
                category: "auto".to_string(),
                status: PaymentStatus::InProgress,
            })
            .collect()
    }

    #[rstest]
    fn test_sum_independent_of_workers(#[values(0, 1, 2, 5, 37)] workers: usize) {
        let amounts: Vec<Money> = (1..=103).map(|i| i * 7).collect();
        let payments = payments_with_amounts(&amounts);
        let sequential: Money = amounts.iter().sum();

        assert_eq!(sum_amounts(&payments, workers), Ok(sequential));
    }

    #[rstest]
    #[case::empty(&[], 4, 0)]
    #[case::single(&[250], 1, 250)]
    #[case::fewer_payments_than_workers(&[1, 2, 3], 8, 6)]
    fn test_sum_edge_cases(
        #[case] amounts: &[Money],
        #[case] workers: usize,
        #[case] expected: Money,
    ) {
        let payments = payments_with_amounts(amounts);
        assert_eq!(sum_amounts(&payments, workers), Ok(expected));
    }

    #[rstest]
    fn test_sum_overflow(#[values(0, 1, 2, 3)] workers: usize) {
        let payments = payments_with_amounts(&[Money::MAX, Money::MAX]);
        assert_eq!(
            sum_amounts(&payments, workers),
            Err(LedgerError::sum_overflow())
        );
    }

    #[rstest]
    fn test_sum_intermediate_overflow_cancels(#[values(0, 1, 2, 3)] workers: usize) {
        let payments = payments_with_amounts(&[Money::MAX, Money::MAX, -Money::MAX]);
        assert_eq!(sum_amounts(&payments, workers), Ok(Money::MAX));
    }
}
