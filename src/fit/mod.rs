//! Polynomial fitting.
//!
//! Responsibilities:
//!
//! - fit one degree via the normal equations (`fitter`)
//! - fit a range of degrees in parallel (`sweep`)

pub mod fitter;
pub mod sweep;

pub use fitter::*;
pub use sweep::*;
