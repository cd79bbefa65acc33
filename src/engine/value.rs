//! The display value: a finite number or the error sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for any failed computation.
pub const ERROR_DISPLAY: &str = "Error";

/// A calculator display value.
///
/// Either a finite number or the sticky `Error` sentinel, never both. Once
/// the evaluator display holds `Error`, the only way out is a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A numeric result, already rounded by [`format`].
    Number(f64),
    /// The error sentinel.
    Error,
}

impl Value {
    /// The numeric payload, if any.
    pub fn number(self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n),
            Value::Error => None,
        }
    }

    /// True for the error sentinel.
    pub fn is_error(self) -> bool {
        matches!(self, Value::Error)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's shortest-repr Display already collapses integral values
            // ("2", not "2.0"), which is the formatting rule the display needs.
            Value::Number(n) => write!(f, "{}", n),
            Value::Error => write!(f, "{}", ERROR_DISPLAY),
        }
    }
}

/// Round to 10 decimal fractional digits.
pub fn round10(value: f64) -> f64 {
    (value * 1e10).round() / 1e10
}

/// Round a raw result and wrap it as a display value.
///
/// Rounding happens before the value is stored back into the accumulator, so
/// chained computations see the rounded number, not the raw one.
pub fn format(value: f64) -> Value {
    Value::Number(round10(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_collapses_to_integer() {
        assert_eq!(format(2.00000000001).to_string(), "2");
        assert_eq!(format(5.0).to_string(), "5");
        assert_eq!(format(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_format_keeps_fractions() {
        assert_eq!(format(0.5).to_string(), "0.5");
        assert_eq!(format(2.25).to_string(), "2.25");
    }

    #[test]
    fn test_format_rounds_accumulated_noise() {
        // 0.1 + 0.2 without rounding would display 0.30000000000000004.
        assert_eq!(format(0.1 + 0.2).to_string(), "0.3");
    }

    #[test]
    fn test_round10_is_idempotent() {
        for v in [0.1 + 0.2, 2.00000000001, -7.123456789012345, 1234.5] {
            let once = round10(v);
            assert_eq!(round10(once), once);
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Value::Error.to_string(), "Error");
        assert!(Value::Error.is_error());
        assert_eq!(Value::Error.number(), None);
    }
}
