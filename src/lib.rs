//! `lsq-fit` library crate.
//!
//! Least-squares polynomial fitting through the normal equations, solved with
//! Gauss-Jordan elimination and partial pivoting. The core entry point is
//! [`fit::fit`]; coefficients come back in ascending powers of x.
//!
//! The binary (`lsq`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fitter is reusable on its own

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;

pub use domain::{Polynomial, SampleSet, SwapPolicy};
pub use error::FitError;
pub use fit::{FitOptions, fit, fit_with};
