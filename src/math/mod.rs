//! Mathematical utilities: normal equations, Gauss-Jordan reduction, evaluation.

pub mod gauss_jordan;
pub mod normal;
pub mod poly;

pub use gauss_jordan::*;
pub use normal::*;
pub use poly::*;
