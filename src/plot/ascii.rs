//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - samples: `o`
//! - fitted polynomial: `-` line

use crate::domain::{FitFile, Polynomial, SampleSet};

/// Render samples with the fitted polynomial drawn underneath.
pub fn render_ascii_plot(samples: &SampleSet, poly: &Polynomial, width: usize, height: usize) -> String {
    let (x_min, x_max) = widen(samples.x_range()).unwrap_or((0.0, 1.0));
    let curve = sample_curve(poly, x_min, x_max, width.max(2));
    render_plot(samples, &curve, x_min, x_max, width, height)
}

/// Render a saved fit's grid (curve only).
pub fn render_ascii_plot_from_fit_file(fit: &FitFile, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = fit
        .grid
        .x
        .iter()
        .zip(fit.grid.y.iter())
        .map(|(&x, &y)| (x, y))
        .collect();
    let (x_min, x_max) = widen(range(curve.iter().map(|&(x, _)| x))).unwrap_or((0.0, 1.0));

    render_plot(&SampleSet::default(), &curve, x_min, x_max, width, height)
}

fn render_plot(
    samples: &SampleSet,
    curve: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    // y-range covers both samples and the curve.
    let ys = samples.ys.iter().copied().chain(curve.iter().map(|&(_, y)| y));
    let (y_min, y_max) = widen(range(ys)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);

    for (x, y) in samples.pairs() {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Give a zero-width range some room so the mapping stays defined.
fn widen(r: Option<(f64, f64)>) -> Option<(f64, f64)> {
    r.map(|(min, max)| if max > min { (min, max) } else { (min - 0.5, max + 0.5) })
}

fn sample_curve(poly: &Polynomial, x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(2);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_min + u * (x_max - x_min);
        out.push((x, poly.evaluate(x)));
    }
    out
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        if !y.is_finite() {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let samples = SampleSet::new(vec![0.0, 9.0], vec![0.0, 4.0]);
        let flat = Polynomial::new(vec![0.0]);

        let txt = render_ascii_plot(&samples, &flat, 10, 5);
        let expected = concat!(
            "Plot: x=[0.000, 9.000] | y=[-0.200, 4.200]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn fit_file_plot_draws_only_the_curve() {
        let poly = Polynomial::new(vec![1.0, 2.0]);
        let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]);
        let fit = crate::io::build_fit_file(&poly, &samples, crate::domain::SwapPolicy::Last);

        let txt = render_ascii_plot_from_fit_file(&fit, 20, 8);
        assert!(txt.starts_with("Plot: x=[0.000, 2.000]"));
        let body: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(body.len(), 8);
        assert!(body.iter().any(|l| l.contains('-')));
        assert!(!body.iter().any(|l| l.contains('o')));
    }
}
