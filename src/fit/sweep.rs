//! Fit a range of degrees to the same samples.
//!
//! Every degree is an independent fit that owns its own matrix, so the degrees
//! are evaluated in parallel. Results come back in ascending degree order, and a
//! failed degree does not stop the others.

use rayon::prelude::*;

use crate::domain::{Polynomial, SampleSet};
use crate::error::FitError;
use crate::fit::fitter::{FitOptions, check_degree, fit_with};

/// Outcome of fitting one degree.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeFit {
    pub degree: usize,
    pub outcome: Result<Polynomial, FitError>,
}

/// Fit every degree in `0..=max_degree`.
///
/// Malformed input (empty, mismatched lengths, non-finite values) and a
/// `max_degree` above [`MAX_DEGREE`](crate::fit::MAX_DEGREE) are rejected up
/// front instead of being repeated once per degree.
pub fn fit_degrees(
    samples: &SampleSet,
    max_degree: usize,
    opts: &FitOptions,
) -> Result<Vec<DegreeFit>, FitError> {
    check_degree(max_degree)?;
    samples.validate()?;

    let fits: Vec<DegreeFit> = (0..=max_degree)
        .into_par_iter()
        .map(|degree| DegreeFit {
            degree,
            outcome: fit_with(degree, &samples.xs, &samples.ys, opts),
        })
        .collect();

    Ok(fits)
}
