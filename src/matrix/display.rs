//! Fixed-width text rendering of a matrix.

use std::fmt;

use super::Matrix;
use super::scalar::Scalar;

/// Column width used by `impl Display for Matrix`.
pub const DEFAULT_WIDTH: usize = 4;

/// Renders a matrix with every element right-aligned in a fixed-width
/// column, each followed by a single space, one row per line.
pub struct MatrixDisplay<'a, T> {
    matrix: &'a Matrix<T>,
    width: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Returns a formatter that pads each element to `width` characters.
    ///
    /// ```
    /// use rowmul::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 20], vec![300, 4]]).unwrap();
    /// assert_eq!(m.display(3).to_string(), "  1  20 \n300   4 \n");
    /// ```
    pub fn display(&self, width: usize) -> MatrixDisplay<'_, T> {
        MatrixDisplay {
            matrix: self,
            width,
        }
    }
}

impl<T: Scalar> fmt::Display for MatrixDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix.iter_rows() {
            for value in row {
                write!(f, "{:>width$} ", value, width = self.width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(DEFAULT_WIDTH), f)
    }
}
