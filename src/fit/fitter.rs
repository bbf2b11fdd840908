//! Least-squares polynomial fitting via the normal equations.
//!
//! Given samples `(x_i, y_i)` and a degree `d`, we:
//! - build the `(d + 1) × (d + 2)` augmented normal-equations matrix
//! - reduce it in place with Gauss-Jordan elimination
//! - read the coefficients off the last column
//!
//! Coefficients come back in ascending powers of x.
//!
//! Fitting never rejects a degree that the data cannot support. Such systems
//! either reduce (with a degraded fit) or end in `FitError::Unsolvable` when a
//! pivot column is numerically zero. Only degrees above [`MAX_DEGREE`] are
//! refused outright.

use log::{debug, warn};

use crate::domain::{Polynomial, SampleSet, SwapPolicy};
use crate::error::FitError;
use crate::math::{PIVOT_EPS, normal_equations, reduce};

/// Largest degree accepted by [`fit_with`].
///
/// Keeps the `(d + 1) × (d + 2)` matrix allocatable and every `x^(2d)`
/// exponent inside `i32`.
pub const MAX_DEGREE: usize = 1024;

/// Knobs for the elimination step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Absolute zero test for pivots.
    pub pivot_eps: f64,
    /// Which qualifying row is swapped in when a pivot is too small.
    pub swap: SwapPolicy,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            pivot_eps: PIVOT_EPS,
            swap: SwapPolicy::Last,
        }
    }
}

/// Fit a polynomial of `degree` to the samples with default options.
pub fn fit(degree: usize, xs: &[f64], ys: &[f64]) -> Result<Polynomial, FitError> {
    fit_with(degree, xs, ys, &FitOptions::default())
}

/// Fit a polynomial of `degree` to the samples.
pub fn fit_with(
    degree: usize,
    xs: &[f64],
    ys: &[f64],
    opts: &FitOptions,
) -> Result<Polynomial, FitError> {
    if !(opts.pivot_eps.is_finite() && opts.pivot_eps > 0.0) {
        return Err(FitError::InvalidThreshold(opts.pivot_eps));
    }
    check_degree(degree)?;
    validate_samples(xs, ys)?;

    if degree >= xs.len() {
        warn!(
            "degree {degree} needs at least {} samples for a determined system, got {}",
            degree + 1,
            xs.len()
        );
    }

    let mut m = normal_equations(degree, xs, ys);
    if let Err(err) = reduce(&mut m, opts.pivot_eps, opts.swap) {
        debug!("degree {degree} fit failed: {err}");
        return Err(err);
    }

    let coefficients: Vec<f64> = m.column(degree + 1).iter().copied().collect();
    if let Some(row) = coefficients.iter().position(|c| !c.is_finite()) {
        debug!("degree {degree} fit overflowed in row {row}: {coefficients:?}");
        return Err(FitError::Unsolvable { row });
    }
    debug!("degree {degree} fit: {coefficients:?}");

    Ok(Polynomial::new(coefficients))
}

/// Convenience wrapper over [`fit_with`] for a [`SampleSet`].
pub fn fit_samples(
    samples: &SampleSet,
    degree: usize,
    opts: &FitOptions,
) -> Result<Polynomial, FitError> {
    fit_with(degree, &samples.xs, &samples.ys, opts)
}

/// Reject degrees above [`MAX_DEGREE`].
pub fn check_degree(degree: usize) -> Result<(), FitError> {
    if degree > MAX_DEGREE {
        return Err(FitError::DegreeTooLarge {
            degree,
            max: MAX_DEGREE,
        });
    }
    Ok(())
}

/// Reject empty, mismatched, or non-finite samples.
pub fn validate_samples(xs: &[f64], ys: &[f64]) -> Result<(), FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(FitError::EmptyInput);
    }
    if let Some(index) = xs
        .iter()
        .zip(ys.iter())
        .position(|(x, y)| !(x.is_finite() && y.is_finite()))
    {
        return Err(FitError::NonFinite { index });
    }
    Ok(())
}
