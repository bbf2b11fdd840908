//! Read/write fit JSON files.
//!
//! A fit file is the portable representation of a fitted polynomial:
//! - degree and ascending-power coefficients
//! - run metadata (generation time, pivot swap policy, sample count)
//! - a precomputed evaluation grid over the sample x range for quick plotting
//!
//! The schema is defined by `domain::FitFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{FitFile, FitGrid, Polynomial, SampleSet, SwapPolicy};
use crate::error::AppError;

/// Number of grid points written to a fit file.
const GRID_POINTS: usize = 101;

/// Assemble a fit file for a polynomial fitted to `samples`.
pub fn build_fit_file(poly: &Polynomial, samples: &SampleSet, swap: SwapPolicy) -> FitFile {
    let (x_min, x_max) = samples.x_range().unwrap_or((0.0, 1.0));
    FitFile {
        tool: "lsq".to_string(),
        generated: Utc::now(),
        degree: poly.degree(),
        coefficients: poly.clone(),
        swap,
        n_samples: samples.len(),
        grid: build_grid(poly, x_min, x_max, GRID_POINTS),
    }
}

/// Write a fit JSON file.
pub fn write_fit_json(path: &Path, fit: &FitFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, fit)
        .map_err(|e| AppError::new(2, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

/// Read a fit JSON file.
pub fn read_fit_json(path: &Path) -> Result<FitFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open fit JSON '{}': {e}", path.display())))?;
    let fit: FitFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid fit JSON: {e}")))?;
    Ok(fit)
}

fn build_grid(poly: &Polynomial, x_min: f64, x_max: f64, n: usize) -> FitGrid {
    let n = n.max(2);
    let mut x0 = x_min;
    let mut x1 = x_max;
    if (x1 - x0).abs() < 1e-9 {
        x0 -= 0.5;
        x1 += 0.5;
    }

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);

    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let xi = x0 + u * (x1 - x0);
        x.push(xi);
        y.push(poly.evaluate(xi));
    }

    FitGrid { x, y }
}
