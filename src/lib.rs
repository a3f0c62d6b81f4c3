//! Multi-threaded dense matrix multiplication with row-partitioned workers.
//!
//! The result rows are split into contiguous, non-overlapping ranges, one
//! per worker thread. Each worker writes only its own block of the result,
//! so there is no locking anywhere in the inner loop. The caller blocks
//! until every worker has joined.
//!
//! ## Usage
//!
//! ```
//! use rowmul::{Matrix, multiply};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let c = multiply(&a, &b, 2).unwrap();
//! assert_eq!(c.into_rows(), vec![vec![19, 22], vec![43, 50]]);
//! ```
//!
//! Asking for more workers than there are rows is fine, the count is
//! clamped:
//!
//! ```
//! use rowmul::{Matrix, multiply};
//!
//! let a = Matrix::<i64>::identity(3);
//! let c = multiply(&a, &a, 64).unwrap();
//! assert_eq!(c, a);
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: the row-major [`Matrix`] container, the [`Scalar`] element
//!   trait, a sequential reference multiply and fixed-width display
//! - `threaded`: planner, row worker and thread dispatch

pub mod error;
pub mod matrix;
pub mod threaded;

pub use error::{Error, Operand};
pub use matrix::Matrix;
pub use matrix::naive::multiply_naive;
pub use matrix::scalar::Scalar;
pub use threaded::dispatch::{multiply, multiply_with_ranges};
pub use threaded::plan::RowRange;
