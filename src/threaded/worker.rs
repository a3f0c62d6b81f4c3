use super::plan::RowRange;
use crate::matrix::Matrix;
use crate::matrix::scalar::Scalar;

/// Computes result rows `range` of `left × right` into `block`.
///
/// `block` is the caller's exclusive slice of the result buffer covering
/// exactly those rows (`range.len() * right.cols()` elements). Each row of
/// `block` is overwritten with the corresponding row of the product, using
/// the i-k-j loop order so both `right` and `block` are walked with
/// stride 1. Nothing outside `block` is written.
///
/// # Panics
///
/// Panics if `left.cols() != right.rows()`, if `right` has no columns, if
/// `block` is not sized for `range`, or if `range` runs past the rows of
/// `left`. These are caller bugs: a planned job never produces them.
pub fn compute_rows<T: Scalar>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    block: &mut [T],
    range: RowRange,
) {
    let k = left.cols();
    let n = right.cols();
    assert_eq!(
        right.rows(),
        k,
        "inner dimension: left has {} cols, right has {} rows",
        k,
        right.rows()
    );
    assert!(n > 0, "right matrix has no columns");
    assert_eq!(
        block.len(),
        range.len() * n,
        "block: expected {}x{}={} elements",
        range.len(),
        n,
        range.len() * n
    );
    assert!(
        range.end <= left.rows(),
        "row range {}..{} exceeds {} rows",
        range.start,
        range.end,
        left.rows()
    );

    let b = right.as_slice();

    for (out_row, r) in block.chunks_exact_mut(n).zip(range.iter()) {
        out_row.fill(T::ZERO);
        let a_row = left.row(r);
        for p in 0..k {
            let a_rp = a_row[p];
            let b_row = &b[p * n..(p + 1) * n];
            for (c, &b_pc) in out_row.iter_mut().zip(b_row) {
                *c = T::mul_add(*c, a_rp, b_pc);
            }
        }
    }
}
