//! Read sample sets from JSON.
//!
//! Expected shape:
//!
//! ```json
//! { "xs": [0.0, 1.0, 2.0], "ys": [1.0, 3.0, 5.0] }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::SampleSet;
use crate::error::AppError;

pub fn read_samples_json(path: &Path) -> Result<SampleSet, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open samples JSON '{}': {e}", path.display())))?;
    let samples: SampleSet = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid samples JSON '{}': {e}", path.display())))?;

    samples.validate()?;
    Ok(samples)
}
