//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - resolves samples and runs the fit or sweep
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use log::debug;

use crate::cli::{Command, FitArgs, PlotArgs, SampleArgs, SweepArgs};
use crate::domain::{FitConfig, SampleSource, SyntheticSpec};
use crate::error::AppError;

pub mod pipeline;

/// Environment variable holding the log filter (`env_logger` syntax).
pub const LOG_ENV: &str = "LSQ_LOG";

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    // A missing `.env` is fine; it only supplies defaults for `LSQ_*` variables.
    let _ = dotenvy::dotenv();
    init_logging();

    // We want `lsq` and `lsq -d 2` to behave like `lsq fit ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    debug!("parsed command: {:?}", cli.command);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_logging() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_fit_summary(&run.samples, &run.poly, &config)
    );

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.samples,
            &run.poly,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export_fit {
        let fit = crate::io::build_fit_file(&run.poly, &run.samples, config.swap);
        crate::io::write_fit_json(path, &fit)?;
        println!("Wrote fit to {}", path.display());
    }

    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = FitConfig {
        degree: args.max_degree,
        ..base_config(&args.samples)
    };
    let (samples, fits) = pipeline::run_sweep(&config, args.max_degree)?;

    println!("{}", crate::report::format_sweep(&samples, &fits));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let fit = crate::io::read_fit_json(&args.fit)?;
    let plot = crate::plot::render_ascii_plot_from_fit_file(&fit, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        degree: args.degree,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_fit: args.export.clone(),
        ..base_config(&args.samples)
    }
}

fn base_config(args: &SampleArgs) -> FitConfig {
    let source = if let Some(path) = &args.input {
        SampleSource::File(path.clone())
    } else if let Some(coefficients) = &args.synthetic {
        SampleSource::Synthetic(SyntheticSpec {
            coefficients: coefficients.clone(),
            points: args.points,
            x_min: args.x_min,
            x_max: args.x_max,
            noise: args.noise,
            seed: args.seed,
        })
    } else {
        SampleSource::Demo
    };

    FitConfig {
        source,
        degree: crate::data::DEMO_DEGREE,
        pivot_eps: args.pivot_eps,
        swap: args.swap,
        plot: false,
        plot_width: 72,
        plot_height: 18,
        export_fit: None,
    }
}

/// Rewrite argv so `lsq` defaults to `lsq fit`.
///
/// Rules:
/// - `lsq`                      -> `lsq fit`
/// - `lsq -d 2 ...`             -> `lsq fit -d 2 ...`
/// - `lsq --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "sweep" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    argv
}
