//! The input token vocabulary.
//!
//! Tokens are the discrete key presses the evaluator understands: ten digits,
//! the decimal point, four binary operators, the unary function keys, equals,
//! percent, sign flip, and clear. Parsing accepts both the plain ASCII names
//! and the keypad glyphs (`√`, `x!`, `x^y`).

use crate::engine::op::{BinaryOp, UnaryOp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A digit 0..=9.
    Digit(u8),
    /// The decimal point.
    Point,
    /// A binary arithmetic operator.
    Binary(BinaryOp),
    /// A unary function key.
    Unary(UnaryOp),
    /// The equals key.
    Equals,
    /// The percent key.
    Percent,
    /// The sign-flip key (`+/-`).
    ToggleSign,
    /// The clear key (`AC`).
    Clear,
}

impl Token {
    /// The text a digit or point contributes to the display.
    pub fn entry_text(self) -> Option<String> {
        match self {
            Token::Digit(d) => Some(d.to_string()),
            Token::Point => Some(".".to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{}", d),
            Token::Point => write!(f, "."),
            Token::Binary(op) => write!(f, "{}", op),
            Token::Unary(op) => write!(f, "{}", op),
            Token::Equals => write!(f, "="),
            Token::Percent => write!(f, "%"),
            Token::ToggleSign => write!(f, "+/-"),
            Token::Clear => write!(f, "AC"),
        }
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                // Single ASCII digit, checked above.
                Token::Digit(s.as_bytes()[0] - b'0')
            }
            "." => Token::Point,
            "+" => Token::Binary(BinaryOp::Add),
            "-" => Token::Binary(BinaryOp::Sub),
            "*" => Token::Binary(BinaryOp::Mul),
            "/" => Token::Binary(BinaryOp::Div),
            "sin" => Token::Unary(UnaryOp::Sin),
            "cos" => Token::Unary(UnaryOp::Cos),
            "tan" => Token::Unary(UnaryOp::Tan),
            "ln" => Token::Unary(UnaryOp::Ln),
            "sqrt" | "√" => Token::Unary(UnaryOp::Sqrt),
            "!" | "x!" => Token::Unary(UnaryOp::Factorial),
            "pow" | "x^y" | "X^y" => Token::Unary(UnaryOp::Power),
            "=" => Token::Equals,
            "%" => Token::Percent,
            "+/-" => Token::ToggleSign,
            "AC" | "ac" => Token::Clear,
            _ => return Err(TokenError::Unknown(s.to_string())),
        };
        Ok(token)
    }
}

/// Errors from parsing token text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("unknown token: {0:?}")]
    Unknown(String),
}
