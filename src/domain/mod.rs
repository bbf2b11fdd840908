//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - sample storage (`SampleSet`) and where samples come from (`SampleSource`)
//! - the fitted `Polynomial` and pivot `SwapPolicy`
//! - run configuration (`FitConfig`) and the saved `FitFile`

pub mod types;

pub use types::*;
