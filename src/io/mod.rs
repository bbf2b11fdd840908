//! Input/output helpers.
//!
//! - sample JSON read + validation (`samples`)
//! - fit JSON read/write (`fit_file`)

pub mod fit_file;
pub mod samples;

pub use fit_file::*;
pub use samples::*;
