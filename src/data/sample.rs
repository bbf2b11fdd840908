//! Sample sources: the built-in demonstration set and synthetic polynomial data.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{SampleSet, SyntheticSpec};
use crate::error::AppError;
use crate::math::polyval;

/// Demonstration data: 14 points lying roughly on a falling line.
const DEMO_POINTS: [(f64, f64); 14] = [
    (3300.0, 0.0),
    (3170.0, 10.0),
    (3000.0, 20.0),
    (2850.0, 30.0),
    (2650.0, 40.0),
    (2520.0, 50.0),
    (2250.0, 60.0),
    (2000.0, 72.0),
    (1800.0, 70.0),
    (1600.0, 66.0),
    (1420.0, 62.0),
    (1300.0, 70.0),
    (1000.0, 84.0),
    (900.0, 98.0),
];

/// Degree used with the demonstration data (it is close to linear).
pub const DEMO_DEGREE: usize = 1;

pub fn demo_sample() -> SampleSet {
    SampleSet::from_pairs(&DEMO_POINTS)
}

/// Generate samples from a known polynomial.
///
/// x values are evenly spaced on `[x_min, x_max]`; y is the polynomial value plus
/// optional Gaussian noise. The same `SyntheticSpec` always yields the same samples.
pub fn synthetic_sample(spec: &SyntheticSpec) -> Result<SampleSet, AppError> {
    if spec.points == 0 {
        return Err(AppError::new(2, "Synthetic point count must be > 0."));
    }
    if spec.coefficients.is_empty() {
        return Err(AppError::new(2, "Synthetic polynomial needs at least one coefficient."));
    }
    if !(spec.x_min.is_finite() && spec.x_max.is_finite() && spec.x_max >= spec.x_min) {
        return Err(AppError::new(2, "Invalid x range for synthetic samples."));
    }
    if !(spec.noise.is_finite() && spec.noise >= 0.0) {
        return Err(AppError::new(2, "Noise level must be finite and >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut xs = Vec::with_capacity(spec.points);
    let mut ys = Vec::with_capacity(spec.points);

    for i in 0..spec.points {
        let x = if spec.points == 1 {
            spec.x_min
        } else {
            let u = i as f64 / (spec.points as f64 - 1.0);
            spec.x_min + u * (spec.x_max - spec.x_min)
        };

        let mut y = polyval(x, &spec.coefficients);
        if spec.noise > 0.0 {
            let z: f64 = normal.sample(&mut rng);
            y += spec.noise * z;
        }

        xs.push(x);
        ys.push(y);
    }

    Ok(SampleSet::new(xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(noise: f64, seed: u64) -> SyntheticSpec {
        SyntheticSpec {
            coefficients: vec![1.0, 2.0, -0.5],
            points: 9,
            x_min: -2.0,
            x_max: 2.0,
            noise,
            seed,
        }
    }

    #[test]
    fn demo_sample_has_fourteen_points() {
        let s = demo_sample();
        assert_eq!(s.len(), 14);
        assert_eq!(s.xs[0], 3300.0);
        assert_eq!(s.ys[13], 98.0);
    }

    #[test]
    fn noiseless_samples_lie_on_the_polynomial() {
        let s = synthetic_sample(&spec(0.0, 1)).unwrap();
        assert_eq!(s.len(), 9);
        assert_eq!(s.xs[0], -2.0);
        assert_eq!(s.xs[8], 2.0);
        for (x, y) in s.pairs() {
            assert_eq!(y, polyval(x, &[1.0, 2.0, -0.5]));
        }
    }

    #[test]
    fn noisy_samples_are_reproducible_per_seed() {
        let a = synthetic_sample(&spec(0.1, 42)).unwrap();
        let b = synthetic_sample(&spec(0.1, 42)).unwrap();
        let c = synthetic_sample(&spec(0.1, 43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.ys, c.ys);
        assert_eq!(a.xs, c.xs);
    }

    #[test]
    fn rejects_bad_specs() {
        let mut s = spec(0.0, 1);
        s.points = 0;
        assert_eq!(synthetic_sample(&s).unwrap_err().exit_code(), 2);

        let mut s = spec(0.0, 1);
        s.x_max = -3.0;
        assert!(synthetic_sample(&s).is_err());

        let s = spec(-1.0, 1);
        assert!(synthetic_sample(&s).is_err());
    }
}
