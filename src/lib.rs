//! # Deskcalc
//!
//! A token-driven desk calculator engine: a single running accumulator with
//! eager left-to-right evaluation, augmented with hand-rolled series
//! approximations for the transcendental function keys.
//!
//! Feed key presses to an [`Evaluator`] and read the display after each one:
//!
//! ```
//! use deskcalc::{Evaluator, Token};
//!
//! let mut calc = Evaluator::new();
//! for key in ["5", "+", "3", "="] {
//!     calc.press(key.parse::<Token>().unwrap());
//! }
//! assert_eq!(calc.display(), "8");
//! ```

pub mod engine;
pub mod numeric;

// Re-export commonly used types
pub use engine::{Accumulator, BinaryOp, Evaluator, PendingOp, Token, TokenError, UnaryOp, Value};
pub use numeric::MathError;
