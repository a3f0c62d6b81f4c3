//! Dense matrix container plus the sequential baseline and display helpers.
//!
//! [`Matrix`] stores its elements row-major in one contiguous buffer. The
//! threaded multiply hands out disjoint row blocks of that buffer to
//! workers, so a row is always a plain `&[T]` / `&mut [T]` slice.

pub mod display;
pub mod naive;
pub mod scalar;

use std::ops::Index;

use crate::error::{Error, Operand};
use scalar::Scalar;

/// A rectangular, row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// Every row must have the length of the first one. An empty outer
    /// vector gives a 0×0 matrix, which multiplication later rejects.
    ///
    /// ```
    /// use rowmul::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(m[(1, 2)], 6);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Wraps a row-major buffer of exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        if data.len() != rows * cols {
            return Err(Error::Shape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// A `rows × cols` matrix with every cell set to `T::ZERO`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::ZERO; rows * cols],
        }
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= self.rows()`.
    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.rows, "row {} out of bounds for {} rows", r, self.rows);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        let cols = self.cols;
        (0..self.rows).map(move |r| &self.data[r * cols..(r + 1) * cols])
    }

    /// Checks that `self × right` is a valid product: both operands are
    /// non-empty and `self.cols() == right.rows()`.
    pub fn check_product(&self, right: &Matrix<T>) -> Result<(), Error> {
        for (operand, m) in [(Operand::Left, self), (Operand::Right, right)] {
            if m.is_empty() {
                return Err(Error::EmptyMatrix {
                    operand,
                    rows: m.rows,
                    cols: m.cols,
                });
            }
        }

        if self.cols != right.rows {
            return Err(Error::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: right.rows,
                right_cols: right.cols,
            });
        }

        Ok(())
    }

    /// The row-major element buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Converts back into nested rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
