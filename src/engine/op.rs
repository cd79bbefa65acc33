//! Operator types and the settle-time dispatch.
//!
//! The calculator defers every operator until the next settle event (a new
//! operator, or equals). Binary and unary operators share that deferral slot,
//! so the pending operation is an explicit sum type: a binary operator
//! combines the accumulator with the operand, a unary operator ignores the
//! accumulator and acts on the operand alone.

use crate::engine::value::{format, Value};
use crate::numeric::{self, MathError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-operand arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        };
        write!(f, "{}", s)
    }
}

/// A single-operand function key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Ln,
    Sqrt,
    Factorial,
    /// The `x^y` key: present on the keypad, never wired to an
    /// implementation. Settling it yields the error sentinel.
    Power,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Ln => "ln",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Factorial => "x!",
            UnaryOp::Power => "x^y",
        };
        write!(f, "{}", s)
    }
}

/// The deferred operation waiting for its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingOp {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl PendingOp {
    /// The reset state: the addition identity.
    pub const IDENTITY: PendingOp = PendingOp::Binary(BinaryOp::Add);
}

impl fmt::Display for PendingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingOp::Binary(op) => write!(f, "{}", op),
            PendingOp::Unary(op) => write!(f, "{}", op),
        }
    }
}

/// Apply a pending operation, keeping the error taxonomy.
///
/// Binary operators combine `acc` with `operand`; unary operators act on
/// `operand` alone. Division by exact zero is a domain error, matching the
/// calculator's `6 / 0 = Error` behavior.
pub fn apply_checked(op: PendingOp, acc: f64, operand: f64) -> Result<f64, MathError> {
    match op {
        PendingOp::Binary(op) => match op {
            BinaryOp::Add => Ok(acc + operand),
            BinaryOp::Sub => Ok(acc - operand),
            BinaryOp::Mul => Ok(acc * operand),
            BinaryOp::Div => {
                if operand == 0.0 {
                    Err(MathError::DivisionByZero)
                } else {
                    Ok(acc / operand)
                }
            }
        },
        PendingOp::Unary(op) => match op {
            UnaryOp::Sin => Ok(numeric::sin_deg(operand)),
            UnaryOp::Cos => Ok(numeric::cos_deg(operand)),
            UnaryOp::Tan => numeric::tan_deg(operand),
            UnaryOp::Ln => numeric::ln(operand),
            UnaryOp::Sqrt => numeric::sqrt(operand),
            UnaryOp::Factorial => numeric::factorial(operand),
            UnaryOp::Power => Err(MathError::PowerUnimplemented),
        },
    }
}

/// Apply a pending operation and produce a display value.
///
/// Every numeric result goes through [`format`]; every domain error collapses
/// to the single `Error` sentinel.
pub fn apply(op: PendingOp, acc: f64, operand: f64) -> Value {
    match apply_checked(op, acc, operand) {
        Ok(result) => format(result),
        Err(_) => Value::Error,
    }
}
