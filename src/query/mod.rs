//! Partitioned query engine over the payment log
//!
//! This module fans read-only queries over a payment slice out to scoped
//! worker threads. Both queries split the slice the same way:
//!
//! ```text
//! n = 11, workers = 3, chunk = floor(11 / 3) = 3
//!
//! [ 0 1 2 | 3 4 5 | 6 7 8 9 10 ]
//!   worker1  worker2  worker3 (takes the remainder)
//! ```
//!
//! # Synchronization
//!
//! Each worker computes a private partial result over its chunk, then takes
//! the shared accumulator's lock exactly once to merge it. The calling thread
//! blocks until every worker has finished.
//!
//! # Components
//!
//! - `aggregator` - Sum of payment amounts
//! - `filter` - Payments accepted by a predicate

pub mod aggregator;
pub mod filter;

pub use aggregator::sum_amounts;
pub use filter::filter;

use std::ops::Range;

/// Split `len` items into `workers` contiguous ranges
///
/// The first `workers - 1` ranges each hold `len / workers` items; the last
/// range runs from the final boundary to `len` and absorbs the remainder.
/// When `workers > len` the leading ranges are empty. `workers == 0` yields
/// one range covering everything.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    if workers == 0 {
        return vec![0..len];
    }

    let chunk = len / workers;
    let mut ranges = Vec::with_capacity(workers);
    let mut max = 0;
    for _ in 1..workers {
        max += chunk;
        ranges.push(max - chunk..max);
    }
    ranges.push(max..len);

    ranges
}
