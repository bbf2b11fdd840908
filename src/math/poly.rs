//! Polynomial evaluation.

/// Evaluate a polynomial with coefficients in ascending powers (`c[0] + c[1]*x + ...`).
///
/// Horner's method, one fused multiply-add per coefficient, starting from the
/// highest power.
#[inline]
pub fn polyval(x: f64, c: &[f64]) -> f64 {
    c.iter().rev().fold(0.0, |acc, &coef| x.mul_add(acc, coef))
}
