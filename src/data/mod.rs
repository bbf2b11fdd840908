//! Sample data for fitting.

pub mod sample;

pub use sample::*;
