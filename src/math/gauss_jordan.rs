//! In-place Gauss-Jordan reduction of an augmented system.
//!
//! The reduction walks the diagonal once. For each row it:
//!
//! 1. checks the diagonal entry against a fixed zero threshold and, if it is too
//!    small, swaps in a lower row whose entry in the same column is large enough
//! 2. divides the row by its pivot
//! 3. subtracts multiples of it from every other row (above and below)
//!
//! so the leading square block ends up as the identity and the last column holds
//! the solution. No back-substitution pass is needed.
//!
//! Numerical notes:
//! - The threshold is absolute, not scaled to the matrix. Badly scaled systems
//!   (large x, high degree) can pivot needlessly, report a false "no solution",
//!   or lose accuracy without tripping it at all.
//! - Only rows below the current one are considered for a swap; rows above are
//!   already reduced.
//! - A NaN or infinite pivot (power sums that overflowed) never qualifies, so
//!   such systems end as `Unsolvable` rather than producing NaN coefficients.

use log::debug;
use nalgebra::DMatrix;

use crate::domain::SwapPolicy;
use crate::error::FitError;

/// Default zero test for pivots.
pub const PIVOT_EPS: f64 = 1e-3;

/// Reduce `m` (an `n × (n + k)` augmented matrix) to reduced row-echelon form.
///
/// On `Err(FitError::Unsolvable { row })` the matrix is left partially reduced
/// and should be discarded.
pub fn reduce(m: &mut DMatrix<f64>, eps: f64, swap: SwapPolicy) -> Result<(), FitError> {
    let (n_rows, n_cols) = m.shape();
    debug_assert!(n_cols >= n_rows, "augmented matrix must be at least square");

    for row in 0..n_rows {
        let mut pivot = m[(row, row)];

        if !usable(pivot, eps) {
            for i in (row + 1)..n_rows {
                let candidate = m[(i, row)];
                if candidate.is_finite() && candidate.abs() > eps {
                    m.swap_rows(row, i);
                    pivot = m[(row, row)];
                    debug!("row {row}: swapped with row {i} (pivot now {pivot:e})");

                    if swap == SwapPolicy::First {
                        break;
                    }
                }
            }

            if !usable(pivot, eps) {
                debug!("row {row}: no pivot above {eps:e}, system is unsolvable");
                return Err(FitError::Unsolvable { row });
            }
        }

        for j in 0..n_cols {
            m[(row, j)] /= pivot;
        }

        for i in 0..n_rows {
            if i == row {
                continue;
            }
            let factor = m[(i, row)];
            for j in 0..n_cols {
                let v = m[(row, j)];
                m[(i, j)] -= factor * v;
            }
        }
    }

    Ok(())
}

fn usable(pivot: f64, eps: f64) -> bool {
    pivot.is_finite() && pivot.abs() >= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn reduces_to_identity_with_solution_column() {
        // x + y = 3, x - y = 1  =>  x = 2, y = 1
        let mut m = DMatrix::from_row_slice(2, 3, &[1.0, 1.0, 3.0, 1.0, -1.0, 1.0]);
        reduce(&mut m, PIVOT_EPS, SwapPolicy::Last).unwrap();

        assert_close(m[(0, 0)], 1.0);
        assert_close(m[(0, 1)], 0.0);
        assert_close(m[(1, 0)], 0.0);
        assert_close(m[(1, 1)], 1.0);
        assert_close(m[(0, 2)], 2.0);
        assert_close(m[(1, 2)], 1.0);
    }

    #[test]
    fn swaps_in_a_row_when_the_diagonal_is_zero() {
        // 0x + y = 4, 2x + y = 6  =>  x = 1, y = 4
        let mut m = DMatrix::from_row_slice(2, 3, &[0.0, 1.0, 4.0, 2.0, 1.0, 6.0]);
        reduce(&mut m, PIVOT_EPS, SwapPolicy::Last).unwrap();
        assert_close(m[(0, 2)], 1.0);
        assert_close(m[(1, 2)], 4.0);
    }

    #[test]
    fn swap_policy_decides_which_row_is_pivoted_in() {
        // x = 1, y = 1, z = 1, with a zero pivot in row 0 and two rows that qualify.
        let m = DMatrix::from_row_slice(
            3,
            4,
            &[
                0.0, 0.0, 1.0, 1.0, //
                0.5, 0.0, 0.0, 0.5, //
                1.0, 0.0015, 0.0, 1.0015,
            ],
        );

        // `Last` pivots on row 2. Eliminating row 1 with it leaves -0.00075 in
        // column 1, under the threshold, and nothing else can be swapped in.
        let mut last = m.clone();
        assert_eq!(
            reduce(&mut last, PIVOT_EPS, SwapPolicy::Last),
            Err(FitError::Unsolvable { row: 1 })
        );

        // `First` pivots on row 1, which leaves 0.0015 in column 1 of row 2.
        let mut first = m.clone();
        reduce(&mut first, PIVOT_EPS, SwapPolicy::First).unwrap();
        for r in 0..3 {
            assert!((first[(r, 3)] - 1.0).abs() < 1e-9, "row {r}: {}", first[(r, 3)]);
        }
    }

    #[test]
    fn reports_the_row_with_no_pivot() {
        // Second equation is a multiple of the first.
        let mut m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0]);
        assert_eq!(
            reduce(&mut m, PIVOT_EPS, SwapPolicy::Last),
            Err(FitError::Unsolvable { row: 1 })
        );
    }

    #[test]
    fn threshold_is_absolute() {
        // A tiny but nonzero diagonal with nothing to swap in is treated as zero.
        let mut m = DMatrix::from_row_slice(1, 2, &[5e-4, 1.0]);
        assert_eq!(
            reduce(&mut m, PIVOT_EPS, SwapPolicy::Last),
            Err(FitError::Unsolvable { row: 0 })
        );

        let mut m = DMatrix::from_row_slice(1, 2, &[5e-4, 1.0]);
        reduce(&mut m, 1e-6, SwapPolicy::Last).unwrap();
        assert!((m[(0, 1)] - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_pivots_never_qualify() {
        let mut m = DMatrix::from_row_slice(2, 3, &[f64::NAN, 1.0, 1.0, f64::INFINITY, 1.0, 2.0]);
        assert_eq!(
            reduce(&mut m, PIVOT_EPS, SwapPolicy::Last),
            Err(FitError::Unsolvable { row: 0 })
        );

        // The NaN row is swapped out of row 0, then fails as the pivot of row 1.
        let mut m = DMatrix::from_row_slice(2, 3, &[f64::NAN, 0.0, 1.0, 2.0, 1.0, 6.0]);
        assert_eq!(
            reduce(&mut m, PIVOT_EPS, SwapPolicy::Last),
            Err(FitError::Unsolvable { row: 1 })
        );
    }
}
