use super::Matrix;
use super::scalar::Scalar;
use crate::error::Error;

/// Sequential matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop: each output cell is one dot product
/// of a row of `left` with a column of `right`. It runs on the calling
/// thread and exists as the correctness baseline for the threaded path.
///
/// Fails with the same shape errors as [`crate::multiply`].
///
/// # Example
///
/// ```
/// use rowmul::Matrix;
/// use rowmul::matrix::naive::multiply_naive;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
///
/// let c = multiply_naive(&a, &b).unwrap();
/// assert_eq!(c.into_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply_naive<T: Scalar>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>, Error> {
    left.check_product(right)?;

    let (m, k, n) = (left.rows(), left.cols(), right.cols());
    let a = left.as_slice();
    let b = right.as_slice();
    let mut c = vec![T::ZERO; m * n];

    for i in 0..m {
        for j in 0..n {
            let mut sum = T::ZERO;
            for p in 0..k {
                sum = T::mul_add(sum, a[i * k + p], b[p * n + j]);
            }
            c[i * n + j] = sum;
        }
    }

    Matrix::from_vec(m, n, c)
}
