//! Normal-equations assembly for a monomial basis.
//!
//! For a degree-`d` fit the augmented system has `d + 1` rows and `d + 2`
//! columns:
//!
//! ```text
//! row r, col c <= d :  Σ_i x_i^(r + c)
//! row r, col d + 1  :  Σ_i y_i · x_i^r
//! ```
//!
//! The left block only depends on `r + c`, so the `2d + 1` power sums are
//! accumulated once and indexed. Each sum runs over the samples in input order,
//! which gives the same values as summing per cell.

use log::trace;
use nalgebra::DMatrix;

/// Build the augmented normal-equations matrix for `degree`.
///
/// `xs` and `ys` must have equal length and `degree` must be at most
/// [`MAX_DEGREE`](crate::fit::MAX_DEGREE); callers validate both first.
pub fn normal_equations(degree: usize, xs: &[f64], ys: &[f64]) -> DMatrix<f64> {
    let power_sums = power_sums(xs, 2 * degree);
    let rhs: Vec<f64> = (0..=degree)
        .map(|r| {
            xs.iter()
                .zip(ys.iter())
                .map(|(&x, &y)| y * x.powi(r as i32))
                .sum()
        })
        .collect();

    trace!("power sums: {power_sums:?}, rhs: {rhs:?}");

    let n = degree + 1;
    DMatrix::from_fn(n, n + 1, |r, c| if c < n { power_sums[r + c] } else { rhs[r] })
}

/// `Σ_i x_i^k` for `k = 0..=max_power`. `x^0` is 1 for every x, including 0.
fn power_sums(xs: &[f64], max_power: usize) -> Vec<f64> {
    (0..=max_power)
        .map(|k| xs.iter().map(|&x| x.powi(k as i32)).sum())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_one_layout() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 3.0, 5.0];
        let m = normal_equations(1, &xs, &ys);

        assert_eq!(m.shape(), (2, 3));
        // [ n    Σx  | Σy  ]
        // [ Σx   Σx² | Σxy ]
        assert_eq!(m[(0, 0)], 3.0);
        assert_eq!(m[(0, 1)], 3.0);
        assert_eq!(m[(0, 2)], 9.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 5.0);
        assert_eq!(m[(1, 2)], 13.0);
    }

    #[test]
    fn leading_block_is_symmetric() {
        let xs = [-1.5, 0.0, 0.25, 2.0, 3.0];
        let ys = [1.0, 2.0, 3.0, 4.0, 5.0];
        let m = normal_equations(3, &xs, &ys);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(m[(r, c)], m[(c, r)]);
            }
        }
    }

    #[test]
    fn zero_to_the_zero_counts_as_one() {
        let m = normal_equations(0, &[0.0, 0.0], &[2.0, 4.0]);
        assert_eq!(m[(0, 0)], 2.0);
        assert_eq!(m[(0, 1)], 6.0);
    }
}
