//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{FitConfig, Polynomial, SampleSet, SampleSource};
use crate::fit::DegreeFit;

/// Format the run summary (samples + options + fitted polynomial).
pub fn format_fit_summary(samples: &SampleSet, poly: &Polynomial, config: &FitConfig) -> String {
    let mut out = String::new();

    out.push_str("=== lsq - Polynomial Least-Squares Fit ===\n");
    out.push_str(&format!("Source: {}\n", source_label(&config.source)));
    out.push_str(&format_sample_line(samples));
    out.push_str(&format!(
        "Degree: {} | pivot_eps={:e} | swap={:?}\n",
        config.degree, config.pivot_eps, config.swap
    ));

    out.push_str("\nCoefficients (ascending powers):\n");
    out.push_str(&format_coefficients(poly));

    out.push_str(&format!("\np(x) = {poly}\n"));
    out.push_str(&format!("params = {}\n", fmt_vec(poly.coefficients())));

    out
}

/// Format a degree sweep as one line per degree.
pub fn format_sweep(samples: &SampleSet, fits: &[DegreeFit]) -> String {
    let mut out = String::new();

    out.push_str("=== lsq - Degree Sweep ===\n");
    out.push_str(&format_sample_line(samples));
    out.push('\n');

    out.push_str(format!("{:>6}  {}\n", "degree", "coefficients (ascending)").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<6}  {:-<24}\n", "", "").trim_end());
    out.push('\n');

    for f in fits {
        let body = match &f.outcome {
            Ok(poly) => fmt_vec(poly.coefficients()),
            Err(err) => format!("(no fit) {err}"),
        };
        out.push_str(&format!("{:>6}  {body}\n", f.degree));
    }

    out
}

fn format_sample_line(samples: &SampleSet) -> String {
    match (samples.x_range(), samples.y_range()) {
        (Some((x0, x1)), Some((y0, y1))) => format!(
            "Samples: n={} | x=[{x0:.3}, {x1:.3}] | y=[{y0:.3}, {y1:.3}]\n",
            samples.len()
        ),
        _ => format!("Samples: n={}\n", samples.len()),
    }
}

fn format_coefficients(poly: &Polynomial) -> String {
    let mut out = String::new();
    out.push_str(format!("{:<8} {:>20}\n", "power", "coefficient").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<8} {:-<20}\n", "", "").trim_end());
    out.push('\n');
    for (k, c) in poly.coefficients().iter().enumerate() {
        out.push_str(&format!("{:<8} {:>20.10}\n", power_label(k), c));
    }
    out
}

fn power_label(k: usize) -> String {
    match k {
        0 => "1".to_string(),
        1 => "x".to_string(),
        _ => format!("x^{k}"),
    }
}

fn source_label(source: &SampleSource) -> String {
    match source {
        SampleSource::Demo => "built-in demo sample".to_string(),
        SampleSource::File(path) => format!("file {}", path.display()),
        SampleSource::Synthetic(spec) => format!(
            "synthetic p(x) = {} (n={}, noise={}, seed={})",
            Polynomial::new(spec.coefficients.clone()),
            spec.points,
            spec.noise,
            spec.seed
        ),
    }
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
