//! Truncated series approximations for sin, cos, tan and ln.
//!
//! The trigonometric functions take their argument in degrees, convert to
//! radians, and sum a fixed number of Maclaurin terms with no convergence
//! check. The logarithm uses the atanh-style series over `y = (x-1)/(x+1)`.

use crate::numeric::MathError;
use std::f64::consts::PI;

/// Sine of an angle given in degrees.
///
/// Sums the Maclaurin terms for odd powers 1..19 (10 terms, truncated).
pub fn sin_deg(degrees: f64) -> f64 {
    let x = degrees * PI / 180.0;
    let mut result = 0.0;
    let mut term = x;
    let mut sign = 1.0;

    for n in (1..20).step_by(2) {
        result += sign * term;
        term = term * x * x / (((n + 1) * (n + 2)) as f64);
        sign = -sign;
    }

    result
}

/// Cosine of an angle given in degrees.
///
/// Leading 1 plus the Maclaurin terms for even powers 2..18.
pub fn cos_deg(degrees: f64) -> f64 {
    let x = degrees * PI / 180.0;
    let mut result = 1.0;
    let mut term = 1.0;
    let mut sign = -1.0;

    for n in (2..20).step_by(2) {
        term = term * x * x / ((n * (n - 1)) as f64);
        result += sign * term;
        sign = -sign;
    }

    result
}

/// Tangent of an angle given in degrees, as `sin/cos`.
///
/// The pole check requires the series cosine to be exactly `0.0`. Because the
/// cosine is itself a truncated approximation, the check essentially never
/// fires near the real poles; `tan(90)` comes out as a huge finite quotient.
/// Kept as-is: replacing the exact comparison with a tolerance would change
/// observable behavior.
pub fn tan_deg(degrees: f64) -> Result<f64, MathError> {
    let c = cos_deg(degrees);
    if c == 0.0 {
        return Err(MathError::TangentPole);
    }
    Ok(sin_deg(degrees) / c)
}

/// Natural logarithm via `2 * sum(y^n / n)` for odd n in 1..19,
/// with `y = (x - 1) / (x + 1)`.
pub fn ln(x: f64) -> Result<f64, MathError> {
    if x <= 0.0 {
        return Err(MathError::NonPositiveLog);
    }

    let y = (x - 1.0) / (x + 1.0);
    let mut result = 0.0;
    let mut term = y;

    for n in (1..20).step_by(2) {
        result += term / n as f64;
        term *= y * y;
    }

    Ok(2.0 * result)
}
