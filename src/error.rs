/// Why a polynomial fit produced no coefficients.
///
/// `Unsolvable` is the ordinary "no solution" outcome of the elimination. The
/// remaining variants reject malformed input before any matrix is built.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// No pivot above the threshold could be found for column `row`, even after
    /// trying to swap a lower row into place.
    Unsolvable { row: usize },
    /// No samples were supplied.
    EmptyInput,
    /// The x and y sequences have different lengths.
    LengthMismatch { xs: usize, ys: usize },
    /// Sample `index` holds a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// The pivot threshold is not a finite positive number.
    InvalidThreshold(f64),
    /// The requested degree is above the largest supported one.
    DegreeTooLarge { degree: usize, max: usize },
}

impl FitError {
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, FitError::Unsolvable { .. })
    }

    /// Process exit code used when this error ends a CLI run.
    pub fn exit_code(&self) -> u8 {
        if self.is_unsolvable() { 3 } else { 2 }
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::Unsolvable { row } => write!(
                f,
                "No solution: normal equations have no usable pivot in column {row}."
            ),
            FitError::EmptyInput => write!(f, "No samples to fit."),
            FitError::LengthMismatch { xs, ys } => {
                write!(f, "Sample length mismatch: {xs} x-values but {ys} y-values.")
            }
            FitError::NonFinite { index } => write!(f, "Sample {index} is not finite."),
            FitError::InvalidThreshold(eps) => {
                write!(f, "Pivot threshold must be finite and > 0 (got {eps}).")
            }
            FitError::DegreeTooLarge { degree, max } => {
                write!(f, "Degree {degree} is too large (at most {max} is supported).")
            }
        }
    }
}

impl std::error::Error for FitError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
