//! Thread-per-range dispatch with a join barrier.

use std::thread;

use tracing::{debug, trace};

use super::plan::{Plan, RowRange, plan};
use super::worker::compute_rows;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::matrix::scalar::Scalar;

/// Multi-threaded matrix multiplication: returns `left × right`.
///
/// Splits the result rows across at most `workers` threads (never more
/// threads than rows), each computing its own contiguous block. The call
/// blocks until every thread has finished. Threads are spawned for this
/// call only and are gone when it returns.
///
/// # Errors
///
/// - [`Error::NoWorkers`] if `workers == 0`
/// - [`Error::EmptyMatrix`] if either input has no rows or no columns
/// - [`Error::DimensionMismatch`] if `left.cols() != right.rows()`
///
/// No thread is started when an error is returned.
///
/// # Panics
///
/// A panicking worker is re-raised on the calling thread once all workers
/// have been joined.
pub fn multiply<T: Scalar>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    workers: usize,
) -> Result<Matrix<T>, Error> {
    multiply_with_ranges(left, right, workers).map(|(result, _)| result)
}

/// Same as [`multiply`] but also returns the row range each worker owned,
/// in worker order.
pub fn multiply_with_ranges<T: Scalar>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    workers: usize,
) -> Result<(Matrix<T>, Vec<RowRange>), Error> {
    let Plan { mut result, ranges } = plan(left, right, workers)?;
    let n = result.cols();

    if let &[only] = ranges.as_slice() {
        compute_rows(left, right, result.as_mut_slice(), only);
        debug!(workers = 1, "multiply finished on calling thread");
        return Ok((result, ranges));
    }

    thread::scope(|s| {
        let mut rest = result.as_mut_slice();
        for (tid, &range) in ranges.iter().enumerate() {
            let (block, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * n);
            rest = tail;

            trace!(tid, start = range.start, end = range.end, "dispatching row worker");
            s.spawn(move || compute_rows(left, right, block, range));
        }
        // Leaving the scope joins every worker.
    });

    debug!(workers = ranges.len(), "all row workers joined");
    Ok((result, ranges))
}
