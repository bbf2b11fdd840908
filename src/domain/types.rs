//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FitError;
use crate::fit::validate_samples;
use crate::math::polyval;

/// Which qualifying row the pivot scan leaves in the pivot position.
///
/// When the diagonal entry is below the threshold, every row underneath it whose
/// entry in the pivot column clears the threshold is a candidate for a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SwapPolicy {
    /// Keep scanning after a swap; each later qualifying row is swapped in as
    /// well, so the last one found wins.
    #[default]
    Last,
    /// Stop at the first qualifying row.
    First,
}

/// Ordered `(x, y)` samples stored as parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SampleSet {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let (xs, ys) = pairs.iter().copied().unzip();
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Check the shape and values before any fitting work is done.
    pub fn validate(&self) -> Result<(), FitError> {
        validate_samples(&self.xs, &self.ys)
    }

    /// Smallest and largest x, or `None` when empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        range_of(&self.xs)
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        range_of(&self.ys)
    }
}

fn range_of(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Polynomial with coefficients in ascending powers of x.
///
/// `coefficients()[k]` multiplies `x^k`, so index 0 is the constant term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient of `x^power`, or 0 past the end.
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefficients.get(power).copied().unwrap_or(0.0)
    }

    /// Degree as fitted (`len - 1`); trailing zeros are not trimmed.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        polyval(x, &self.coefficients)
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        for (k, &c) in self.coefficients.iter().enumerate() {
            if k > 0 {
                let sign = if c.is_sign_negative() { '-' } else { '+' };
                write!(f, " {sign} {:.6}", c.abs())?;
            } else {
                write!(f, "{c:.6}")?;
            }
            match k {
                0 => {}
                1 => write!(f, "·x")?,
                _ => write!(f, "·x^{k}")?,
            }
        }
        Ok(())
    }
}

/// Where the samples for a run come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSource {
    /// The built-in 14-point demonstration set.
    Demo,
    /// A JSON file with `xs` / `ys` arrays.
    File(PathBuf),
    /// Points generated from a known polynomial.
    Synthetic(SyntheticSpec),
}

/// Parameters for generating samples from a known polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSpec {
    /// Ascending-power coefficients of the generating polynomial.
    pub coefficients: Vec<f64>,
    pub points: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Standard deviation of additive Gaussian noise on y (0 = exact).
    pub noise: f64,
    pub seed: u64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment and defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub source: SampleSource,
    pub degree: usize,
    pub pivot_eps: f64,
    pub swap: SwapPolicy,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_fit: Option<PathBuf>,
}

/// A saved fit file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub degree: usize,
    /// Ascending powers of x.
    pub coefficients: Polynomial,
    pub swap: SwapPolicy,
    pub n_samples: usize,
    pub grid: FitGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_malformed_samples() {
        let mismatch = SampleSet::new(vec![1.0, 2.0], vec![1.0]);
        assert_eq!(mismatch.validate(), Err(FitError::LengthMismatch { xs: 2, ys: 1 }));

        assert_eq!(SampleSet::default().validate(), Err(FitError::EmptyInput));

        let nan = SampleSet::new(vec![1.0, f64::NAN], vec![1.0, 2.0]);
        assert_eq!(nan.validate(), Err(FitError::NonFinite { index: 1 }));

        let ok = SampleSet::from_pairs(&[(0.0, 1.0), (1.0, 2.0)]);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn polynomial_display_uses_ascending_powers() {
        let p = Polynomial::new(vec![1.0, -2.0, 0.5]);
        assert_eq!(p.to_string(), "1.000000 - 2.000000·x + 0.500000·x^2");
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficient(5), 0.0);
    }

    #[test]
    fn polynomial_serializes_as_plain_array() {
        let p = Polynomial::new(vec![1.0, 2.0]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.0,2.0]");
    }
}
