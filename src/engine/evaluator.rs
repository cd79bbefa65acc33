//! The accumulator state machine.
//!
//! A single running accumulator, no expression tree, no precedence: operators
//! settle eagerly left to right, so `2 + 3 * 4 =` displays 20, not 14. The
//! display is built by string concatenation while digits arrive and replaced
//! wholesale on every settle event.

use crate::engine::op::{self, PendingOp};
use crate::engine::token::Token;
use crate::engine::value::{format, Value, ERROR_DISPLAY};
use serde::{Deserialize, Serialize};

/// The evaluator's running state between settle events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    /// First operand of the pending operation.
    pub operand: f64,
    /// The deferred operator, resolved at the next settle event.
    pub op: PendingOp,
    /// True when the next digit starts a fresh number.
    pub awaiting_operand: bool,
}

impl Accumulator {
    /// The reset state: operand 0, the addition identity, fresh entry.
    pub fn new() -> Self {
        Self {
            operand: 0.0,
            op: PendingOp::IDENTITY,
            awaiting_operand: true,
        }
    }

    /// Return to the reset state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// The expression evaluator.
///
/// Feed it one [`Token`] at a time with [`press`](Evaluator::press) and read
/// the display after each call. All failure paths surface as the sticky
/// `Error` display; the only recovery is [`Token::Clear`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluator {
    /// What the caller observes.
    display: String,
    /// The numeric text backing the display. Diverges from `display` only
    /// while a unary operator's label is shown, so a settle event right after
    /// a unary key still sees the number that was on screen.
    entry: String,
    /// Pending operand, operator, and entry flag.
    acc: Accumulator,
}

impl Evaluator {
    /// A fresh evaluator showing `0`.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            entry: "0".to_string(),
            acc: Accumulator::new(),
        }
    }

    /// The current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The accumulator state, for inspection and snapshots.
    pub fn accumulator(&self) -> &Accumulator {
        &self.acc
    }

    /// Handle one key press and return the updated display.
    pub fn press(&mut self, token: Token) -> &str {
        // A poisoned display accepts nothing but a reset.
        if self.display == ERROR_DISPLAY || token == Token::Clear {
            self.clear();
            return &self.display;
        }

        match token {
            Token::Digit(_) | Token::Point => self.enter_digit(token),
            Token::Binary(op) => self.settle_then_pend(PendingOp::Binary(op)),
            Token::Unary(op) => self.pend_unary(PendingOp::Unary(op)),
            Token::Equals => self.settle_and_reset(),
            Token::Percent => self.percent(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Clear => unreachable!("handled above"),
        }

        &self.display
    }

    /// Feed a whole token sequence, returning the final display.
    pub fn run<I>(&mut self, tokens: I) -> &str
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.press(token);
        }
        &self.display
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.entry = "0".to_string();
        self.acc.reset();
    }

    /// Transition 1: build the displayed numeral by string concatenation.
    /// Multiple decimal points are not prevented; a malformed entry settles
    /// to the error sentinel later.
    fn enter_digit(&mut self, token: Token) {
        let text = match token.entry_text() {
            Some(t) => t,
            None => return,
        };

        if self.entry == "0" || self.acc.awaiting_operand {
            self.entry = text;
            self.acc.awaiting_operand = false;
        } else {
            self.entry.push_str(&text);
        }
        self.display = self.entry.clone();
    }

    /// Current numeric entry, or `None` if the text does not parse
    /// (e.g. "1.2.3").
    fn entry_value(&self) -> Option<f64> {
        self.entry.parse::<f64>().ok()
    }

    /// Resolve the pending operation against the current entry.
    fn settle(&mut self) -> Value {
        match self.entry_value() {
            Some(operand) => op::apply(self.acc.op, self.acc.operand, operand),
            None => Value::Error,
        }
    }

    /// Show a settled value, keeping entry and display in sync.
    fn show(&mut self, value: Value) {
        self.display = value.to_string();
        self.entry = self.display.clone();
    }

    /// Transition 2: settle eagerly, then defer the new binary operator.
    fn settle_then_pend(&mut self, next: PendingOp) {
        let result = self.settle();
        self.show(result);
        self.acc.op = next;
        self.acc.operand = result.number().unwrap_or(0.0);
        self.acc.awaiting_operand = true;
    }

    /// Transition 3: a unary key shows its label and waits. The numeric
    /// entry underneath is untouched, so `9 sqrt =` settles against 9, while
    /// `9 sqrt 4 =` replaces the entry and settles against 4.
    fn pend_unary(&mut self, op: PendingOp) {
        self.display = op.to_string();
        self.acc.op = op;
        self.acc.awaiting_operand = true;
    }

    /// Transition 4: equals settles and then fully resets, so a repeated
    /// `=` only re-adds the identity 0 to whatever is displayed.
    fn settle_and_reset(&mut self) {
        let result = self.settle();
        self.show(result);
        self.acc.reset();
    }

    /// Transition 5: percent is a plain division of the entry by 100, not a
    /// percentage of the accumulator.
    fn percent(&mut self) {
        let value = match self.entry_value() {
            Some(v) => Value::Number(v / 100.0),
            None => Value::Error,
        };
        self.show(value);
        self.acc.reset();
    }

    /// Transition 6: sign flip. A positive entry gains a `-` prefix as raw
    /// text; a negative entry is replaced by its formatted absolute value.
    /// Zero is a no-op in both branches.
    fn toggle_sign(&mut self) {
        match self.entry_value() {
            Some(v) if v > 0.0 => {
                self.entry.insert(0, '-');
                self.display = self.entry.clone();
            }
            Some(v) if v < 0.0 => {
                self.show(format(v.abs()));
            }
            Some(_) => {}
            None => {
                self.show(Value::Error);
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::op::BinaryOp;
    use proptest::prelude::*;

    /// Feed a sequence of token labels, return the final display.
    fn feed(tokens: &[&str]) -> String {
        let mut calc = Evaluator::new();
        for t in tokens {
            calc.press(t.parse().unwrap());
        }
        calc.display().to_string()
    }

    #[test]
    fn test_simple_addition() {
        assert_eq!(feed(&["5", "+", "3", "="]), "8");
    }

    #[test]
    fn test_digit_concatenation() {
        assert_eq!(feed(&["1", "2", "3"]), "123");
        assert_eq!(feed(&["0", "5"]), "5");
        assert_eq!(feed(&["1", ".", "5", "+", "2", "="]), "3.5");
    }

    #[test]
    fn test_no_precedence() {
        // Eager left-to-right settling: (2 + 3) * 4, never 2 + (3 * 4).
        assert_eq!(feed(&["2", "+", "3", "*", "4", "="]), "20");
    }

    #[test]
    fn test_chained_operators_show_running_total() {
        let mut calc = Evaluator::new();
        calc.run(["5", "+", "3"].iter().map(|t| t.parse().unwrap()));
        assert_eq!(calc.display(), "3");
        calc.press("+".parse().unwrap());
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn test_division_by_zero_poisons_display() {
        assert_eq!(feed(&["6", "/", "0", "="]), "Error");
    }

    #[test]
    fn test_error_is_sticky_until_clear() {
        let mut calc = Evaluator::new();
        calc.run(["6", "/", "0", "="].iter().map(|t| t.parse().unwrap()));
        assert_eq!(calc.display(), "Error");

        // Any key clears an errored display instead of acting.
        calc.press("7".parse().unwrap());
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), &Accumulator::new());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Evaluator::new();
        calc.run(["5", "+", "3"].iter().map(|t| t.parse().unwrap()));
        calc.press("AC".parse().unwrap());
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), &Accumulator::new());
        assert_eq!(calc.accumulator().op, PendingOp::Binary(BinaryOp::Add));
    }

    #[test]
    fn test_unary_settles_against_shown_number() {
        // The sqrt key shows its label but keeps 9 as the entry.
        let mut calc = Evaluator::new();
        calc.press("9".parse().unwrap());
        calc.press("sqrt".parse().unwrap());
        assert_eq!(calc.display(), "sqrt");
        calc.press("=".parse().unwrap());
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_unary_applies_to_following_entry() {
        // A digit after the unary key replaces the entry.
        assert_eq!(feed(&["9", "sqrt", "4", "="]), "2");
    }

    #[test]
    fn test_unary_transcendentals() {
        assert_eq!(feed(&["9", "0", "sin", "="]), "1");
        assert_eq!(feed(&["0", "cos", "="]), "1");
        assert_eq!(feed(&["1", "ln", "="]), "0");
        assert_eq!(feed(&["5", "x!", "="]), "120");
    }

    #[test]
    fn test_unary_domain_error() {
        assert_eq!(feed(&["5", "-", "6", "=", "sqrt", "="]), "Error");
    }

    #[test]
    fn test_power_key_is_a_placeholder() {
        assert_eq!(feed(&["2", "x^y", "="]), "Error");
    }

    #[test]
    fn test_repeated_equals_readds_identity() {
        // After the reset that follows `=`, the pending operation is `0 +`,
        // so further `=` presses leave the display unchanged.
        let mut calc = Evaluator::new();
        calc.run(["5", "+", "3", "="].iter().map(|t| t.parse().unwrap()));
        assert_eq!(calc.display(), "8");
        calc.press("=".parse().unwrap());
        assert_eq!(calc.display(), "8");
        calc.press("=".parse().unwrap());
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn test_percent_divides_entry_only() {
        assert_eq!(feed(&["5", "0", "%"]), "0.5");
        // Percent resets the accumulator: the pending `+ 200` is dropped.
        assert_eq!(feed(&["2", "0", "0", "+", "5", "0", "%", "="]), "0.5");
    }

    #[test]
    fn test_toggle_sign() {
        assert_eq!(feed(&["5", "+/-"]), "-5");
        assert_eq!(feed(&["5", "+/-", "+/-"]), "5");
        // Zero is a no-op in both branches.
        assert_eq!(feed(&["0", "+/-"]), "0");
    }

    #[test]
    fn test_toggle_sign_in_expression() {
        assert_eq!(feed(&["8", "+/-", "+", "3", "="]), "-5");
    }

    #[test]
    fn test_malformed_entry_settles_to_error() {
        // Nothing stops a second decimal point; the entry fails to parse at
        // settle time and poisons the display.
        assert_eq!(feed(&["1", ".", "2", ".", "3", "="]), "Error");
    }

    #[test]
    fn test_display_rounds_to_ten_decimals() {
        assert_eq!(feed(&["0", ".", "1", "+", "0", ".", "2", "="]), "0.3");
    }

    proptest! {
        // Entering an integer and settling it against the identity gives the
        // integer back.
        #[test]
        fn prop_integer_entry_roundtrip(n in 0u32..1_000_000) {
            let mut calc = Evaluator::new();
            for c in n.to_string().chars() {
                calc.press(Token::Digit(c as u8 - b'0'));
            }
            calc.press(Token::Equals);
            prop_assert_eq!(calc.display(), n.to_string());
        }
    }
}
