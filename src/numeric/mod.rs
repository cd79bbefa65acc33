//! Numeric approximations for the calculator.
//!
//! Everything here is hand-rolled on purpose: truncated Maclaurin series for
//! the trigonometric functions and the natural logarithm, a fixed-iteration
//! Newton's method for the square root, and an exact integer factorial. Each
//! function runs a fixed, bounded number of term evaluations, so worst-case
//! latency is constant.

pub mod factorial;
pub mod newton;
pub mod series;

pub use factorial::factorial;
pub use newton::sqrt;
pub use series::{cos_deg, ln, sin_deg, tan_deg};

use thiserror::Error;

/// Domain failures of the numeric functions.
///
/// Every variant surfaces to the calculator display as the same `Error`
/// sentinel; the distinction only matters to callers of the checked API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("square root of a negative number")]
    NegativeSqrt,

    #[error("logarithm of a non-positive number")]
    NonPositiveLog,

    #[error("tangent pole (cosine is zero)")]
    TangentPole,

    #[error("factorial of a negative number")]
    NegativeFactorial,

    #[error("factorial of a non-integral number")]
    FractionalFactorial,

    #[error("factorial result exceeds 128 bits")]
    FactorialOverflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("power operation is not implemented")]
    PowerUnimplemented,
}
