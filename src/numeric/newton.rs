//! Square root by Newton's method.

use crate::numeric::MathError;

/// Square root of `a` using exactly 10 Newton iterations seeded at `x0 = a`.
///
/// No convergence check; ten iterations are enough to land within 1e-9 for
/// the magnitudes a desk calculator sees. Negative input is a domain error
/// (no complex results). Zero is returned directly, since the seed would
/// otherwise divide zero by zero.
pub fn sqrt(a: f64) -> Result<f64, MathError> {
    if a < 0.0 {
        return Err(MathError::NegativeSqrt);
    }
    if a == 0.0 {
        return Ok(0.0);
    }

    let mut x = a;
    for _ in 0..10 {
        x = (x + a / x) / 2.0;
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(sqrt(-1.0), Err(MathError::NegativeSqrt));
    }

    #[test]
    fn test_sqrt_zero() {
        assert_eq!(sqrt(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_sqrt_two_converges() {
        let root = sqrt(2.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_sqrt_perfect_squares() {
        assert!((sqrt(9.0).unwrap() - 3.0).abs() < 1e-9);
        assert!((sqrt(144.0).unwrap() - 12.0).abs() < 1e-9);
    }

    proptest! {
        // Ten iterations from the seed x0 = a converge for moderate inputs;
        // very large inputs would need more halving steps first.
        #[test]
        fn prop_sqrt_matches_std(a in 0.01f64..500.0) {
            let root = sqrt(a).unwrap();
            let expected = a.sqrt();
            prop_assert!((root - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
