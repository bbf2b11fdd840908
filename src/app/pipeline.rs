//! Shared "fit pipeline" logic used by the `fit` and `sweep` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! resolve samples -> fit -> (plot / export)
//!
//! The command handlers can then focus on presentation.

use log::info;

use crate::data::{demo_sample, synthetic_sample};
use crate::domain::{FitConfig, Polynomial, SampleSet, SampleSource};
use crate::error::AppError;
use crate::fit::{DegreeFit, FitOptions, fit_degrees, fit_samples};
use crate::io::read_samples_json;

/// All computed outputs of a single `lsq fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    pub poly: Polynomial,
}

/// Resolve the configured sample source into concrete samples.
pub fn load_samples(source: &SampleSource) -> Result<SampleSet, AppError> {
    let samples = match source {
        SampleSource::Demo => demo_sample(),
        SampleSource::File(path) => read_samples_json(path)?,
        SampleSource::Synthetic(spec) => synthetic_sample(spec)?,
    };
    info!("loaded {} samples", samples.len());
    Ok(samples)
}

pub fn fit_options(config: &FitConfig) -> FitOptions {
    FitOptions {
        pivot_eps: config.pivot_eps,
        swap: config.swap,
    }
}

/// Execute the fit and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let samples = load_samples(&config.source)?;
    let poly = fit_samples(&samples, config.degree, &fit_options(config))?;
    info!("fitted degree {}: {poly}", config.degree);
    Ok(RunOutput { samples, poly })
}

/// Execute a degree sweep over the configured samples.
pub fn run_sweep(config: &FitConfig, max_degree: usize) -> Result<(SampleSet, Vec<DegreeFit>), AppError> {
    let samples = load_samples(&config.source)?;
    let fits = fit_degrees(&samples, max_degree, &fit_options(config))?;
    Ok((samples, fits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SwapPolicy, SyntheticSpec};

    fn config(source: SampleSource, degree: usize) -> FitConfig {
        FitConfig {
            source,
            degree,
            pivot_eps: 1e-3,
            swap: SwapPolicy::Last,
            plot: false,
            plot_width: 60,
            plot_height: 15,
            export_fit: None,
        }
    }

    #[test]
    fn synthetic_run_recovers_generator() {
        let spec = SyntheticSpec {
            coefficients: vec![0.5, -1.0, 2.0],
            points: 11,
            x_min: -1.0,
            x_max: 1.0,
            noise: 0.0,
            seed: 7,
        };
        let run = run_fit(&config(SampleSource::Synthetic(spec), 2)).unwrap();
        for (got, want) in run.poly.coefficients().iter().zip([0.5, -1.0, 2.0]) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }

    #[test]
    fn unsolvable_fit_exits_with_code_three() {
        let spec = SyntheticSpec {
            coefficients: vec![1.0],
            points: 1,
            x_min: 0.0,
            x_max: 0.0,
            noise: 0.0,
            seed: 7,
        };
        let err = run_fit(&config(SampleSource::Synthetic(spec), 2)).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn sweep_uses_demo_sample() {
        let (samples, fits) = run_sweep(&config(SampleSource::Demo, 1), 2).unwrap();
        assert_eq!(samples.len(), 14);
        assert_eq!(fits.len(), 3);
    }
}
