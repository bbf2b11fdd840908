//! Command-line parsing for the polynomial fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::SwapPolicy;
use crate::math::PIVOT_EPS;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsq", version, about = "Polynomial least-squares fit via the normal equations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit one polynomial, print coefficients, and optionally plot/export.
    ///
    /// With no sample flags this fits a line to the built-in demo sample.
    Fit(FitArgs),
    /// Fit every degree from 0 to `--max-degree` and list the coefficients.
    Sweep(SweepArgs),
    /// Plot a previously exported fit JSON.
    Plot(PlotArgs),
}

/// Where samples come from and how elimination behaves.
#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    /// Read samples from a JSON file with `xs` and `ys` arrays.
    #[arg(long, value_name = "JSON", conflicts_with = "synthetic")]
    pub input: Option<PathBuf>,

    /// Generate samples from a polynomial, coefficients in ascending powers (e.g. `1,2,0.5`).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, value_name = "COEFFS")]
    pub synthetic: Option<Vec<f64>>,

    /// Number of synthetic samples.
    #[arg(long, default_value_t = 20)]
    pub points: usize,

    /// Smallest synthetic x.
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Largest synthetic x.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Standard deviation of Gaussian noise added to synthetic y values.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for synthetic noise.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Absolute zero test for pivots.
    #[arg(long, env = "LSQ_PIVOT_EPS", default_value_t = PIVOT_EPS)]
    pub pivot_eps: f64,

    /// Which qualifying row is swapped in when a pivot is too small.
    #[arg(long, env = "LSQ_SWAP", value_enum, default_value_t = SwapPolicy::Last)]
    pub swap: SwapPolicy,
}

/// Options for a single fit.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Polynomial degree.
    #[arg(short = 'd', long, default_value_t = 1)]
    pub degree: usize,

    #[command(flatten)]
    pub samples: SampleArgs,

    /// Skip the terminal plot (drawn by default).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 18)]
    pub height: usize,

    /// Export the fit (coefficients + evaluation grid) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for a degree sweep.
#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    /// Highest degree to fit.
    #[arg(long, default_value_t = 4)]
    pub max_degree: usize,

    #[command(flatten)]
    pub samples: SampleArgs,
}

/// Options for plotting a saved fit.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Fit JSON file produced by `lsq fit --export`.
    #[arg(long, value_name = "JSON")]
    pub fit: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 18)]
    pub height: usize,
}
