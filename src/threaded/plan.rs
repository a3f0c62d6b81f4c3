//! Job validation and row partitioning.

use std::ops::Range;

use tracing::debug;

use crate::error::Error;
use crate::matrix::Matrix;
use crate::matrix::scalar::Scalar;

/// Half-open interval `[start, end)` of result rows owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted row range {}..{}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<RowRange> for Range<usize> {
    fn from(r: RowRange) -> Self {
        r.start..r.end
    }
}

/// A validated job: the zeroed result buffer and one row range per worker.
#[derive(Debug)]
pub struct Plan<T> {
    pub result: Matrix<T>,
    pub ranges: Vec<RowRange>,
}

/// Splits `rows` result rows across at most `workers` workers.
///
/// The worker count is clamped to `rows`. With `chunk = rows / workers` and
/// `remainder = rows % workers`, the first `remainder` ranges get
/// `chunk + 1` rows and the rest get `chunk`, laid out contiguously from
/// row 0. Returns no ranges when `rows` or `workers` is zero.
///
/// ```
/// use rowmul::threaded::plan::{partition_rows, RowRange};
///
/// assert_eq!(
///     partition_rows(7, 3),
///     vec![RowRange::new(0, 3), RowRange::new(3, 5), RowRange::new(5, 7)]
/// );
/// ```
pub fn partition_rows(rows: usize, workers: usize) -> Vec<RowRange> {
    let workers = workers.min(rows);
    if workers == 0 {
        return Vec::new();
    }

    let chunk = rows / workers;
    let remainder = rows % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for tid in 0..workers {
        let end = start + chunk + usize::from(tid < remainder);
        ranges.push(RowRange::new(start, end));
        start = end;
    }

    debug_assert_eq!(start, rows);
    ranges
}

/// Validates a multiply job and lays out its work.
///
/// All checks run before the result is allocated. On success the result is
/// `left.rows() × right.cols()` zeros and the ranges cover every result row
/// exactly once.
pub fn plan<T: Scalar>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    requested_workers: usize,
) -> Result<Plan<T>, Error> {
    if requested_workers == 0 {
        return Err(Error::NoWorkers);
    }
    left.check_product(right)?;

    let ranges = partition_rows(left.rows(), requested_workers);
    debug!(
        left_rows = left.rows(),
        left_cols = left.cols(),
        right_cols = right.cols(),
        requested_workers,
        effective_workers = ranges.len(),
        "planned multiply job"
    );

    Ok(Plan {
        result: Matrix::zeros(left.rows(), right.cols()),
        ranges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operand;

    fn assert_exact_cover(rows: usize, ranges: &[RowRange]) {
        let mut next = 0;
        for r in ranges {
            assert_eq!(r.start, next, "gap or overlap at row {}", next);
            assert!(!r.is_empty(), "empty range {:?}", r);
            next = r.end;
        }
        assert_eq!(next, rows, "ranges stop at {} of {}", next, rows);
    }

    #[test]
    fn test_partition_covers_every_row_once() {
        for rows in 1..=40 {
            for workers in 1..=45 {
                let ranges = partition_rows(rows, workers);
                assert_eq!(ranges.len(), workers.min(rows));
                assert_exact_cover(rows, &ranges);

                let longest = ranges.iter().map(RowRange::len).max().unwrap();
                let shortest = ranges.iter().map(RowRange::len).min().unwrap();
                assert!(longest - shortest <= 1, "{} rows / {} workers unbalanced", rows, workers);
            }
        }
    }

    #[test]
    fn test_partition_front_loads_remainder() {
        let lens: Vec<usize> = partition_rows(10, 4).iter().map(RowRange::len).collect();
        assert_eq!(lens, vec![3, 3, 2, 2]);

        let lens: Vec<usize> = partition_rows(19, 30).iter().map(RowRange::len).collect();
        assert_eq!(lens, vec![1; 19]);
    }

    #[test]
    fn test_partition_degenerate() {
        assert!(partition_rows(0, 4).is_empty());
        assert!(partition_rows(4, 0).is_empty());
        assert_eq!(partition_rows(1, 1), vec![RowRange::new(0, 1)]);
    }

    #[test]
    fn test_plan_allocates_zeroed_result() {
        let a = Matrix::<i32>::zeros(4, 3);
        let b = Matrix::<i32>::from_vec(3, 5, (1..=15).collect()).unwrap();

        let plan = plan(&a, &b, 10).unwrap();
        assert_eq!((plan.result.rows(), plan.result.cols()), (4, 5));
        assert!(plan.result.as_slice().iter().all(|&v| v == 0));
        assert_eq!(plan.ranges.len(), 4);
        assert_exact_cover(4, &plan.ranges);
    }

    #[test]
    fn test_plan_rejects_bad_jobs() {
        let a = Matrix::<i32>::zeros(2, 3);
        let b = Matrix::<i32>::zeros(2, 3);
        assert_eq!(
            plan(&a, &b, 2).unwrap_err(),
            Error::DimensionMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 2,
                right_cols: 3
            }
        );

        let empty = Matrix::<i32>::zeros(3, 0);
        assert_eq!(
            plan(&empty, &a, 2).unwrap_err(),
            Error::EmptyMatrix {
                operand: Operand::Left,
                rows: 3,
                cols: 0
            }
        );
        assert_eq!(
            plan(&a, &Matrix::zeros(0, 0), 2).unwrap_err(),
            Error::EmptyMatrix {
                operand: Operand::Right,
                rows: 0,
                cols: 0
            }
        );

        let square = Matrix::<i32>::identity(2);
        assert_eq!(plan(&square, &square, 0).unwrap_err(), Error::NoWorkers);
    }
}
