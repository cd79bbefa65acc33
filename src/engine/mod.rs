//! The expression evaluator.
//!
//! A faithful single-register calculator: one pending operand, one pending
//! operator (binary or unary), and a flag marking whether the next digit
//! starts a fresh number. Tokens arrive one at a time and every failure path
//! collapses to the sticky `Error` display.

pub mod evaluator;
pub mod op;
pub mod token;
pub mod value;

pub use evaluator::{Accumulator, Evaluator};
pub use op::{apply, apply_checked, BinaryOp, PendingOp, UnaryOp};
pub use token::{Token, TokenError};
pub use value::{format, round10, Value, ERROR_DISPLAY};
