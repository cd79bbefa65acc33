//! Exact factorial over a 128-bit accumulator.

use crate::numeric::MathError;

/// Factorial of a non-negative integral value.
///
/// The operand arrives as an `f64` from the display, so the integrality check
/// happens here: negative or fractional input is a domain error. The product
/// is computed exactly in `u128` with checked multiplication; `35!` no longer
/// fits and reports overflow rather than wrapping.
pub fn factorial(n: f64) -> Result<f64, MathError> {
    if n < 0.0 {
        return Err(MathError::NegativeFactorial);
    }
    if n.fract() != 0.0 {
        return Err(MathError::FractionalFactorial);
    }

    let mut result: u128 = 1;
    let mut i: u128 = 1;
    while (i as f64) <= n {
        result = result.checked_mul(i).ok_or(MathError::FactorialOverflow)?;
        i += 1;
    }

    Ok(result as f64)
}
