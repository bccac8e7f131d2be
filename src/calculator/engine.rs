//! The calculator state machine.
//!
//! Owns the display text, the captured first operand and the pending
//! operator. Every entry point mutates the state in place and leaves the
//! display renderable; arithmetic edge cases surface as `Infinity` or `NaN`
//! text instead of errors.

use super::format::{format_number, is_special, parse_display, round_to};
use super::input::{DECIMAL_MARKER, Input};
use super::operator::Operator;
use serde::Serialize;

/// Decimal places kept after each computation unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 8;

/// Snapshot of the observable calculator state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    pub display_value: String,
    pub first_operand: Option<f64>,
    pub pending_second_operand: bool,
    pub operator: Option<Operator>,
}

/// A four-function calculator driven one key at a time.
#[derive(Clone, Debug)]
pub struct Calculator {
    display_value: String,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    /// The next digit replaces the display instead of extending it.
    /// Set by operators and kept across equals, so typing after a result
    /// starts a fresh number.
    start_new_number: bool,
    precision: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator showing "0".
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Create a calculator that rounds results to `precision` decimal places.
    pub fn with_precision(precision: u32) -> Self {
        Self {
            display_value: "0".to_string(),
            first_operand: None,
            operator: None,
            start_new_number: false,
            precision,
        }
    }

    /// The text currently shown.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True right after an operator was chosen and before any digit was typed.
    pub fn pending_second_operand(&self) -> bool {
        self.start_new_number && self.operator.is_some()
    }

    pub fn state(&self) -> CalculatorState {
        CalculatorState {
            display_value: self.display_value.clone(),
            first_operand: self.first_operand(),
            pending_second_operand: self.pending_second_operand(),
            operator: self.operator(),
        }
    }

    /// Dispatch a classified input and return the display to render.
    pub fn handle(&mut self, input: Input) -> &str {
        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => self.handle_operator(op),
            Input::Clear => self.reset(),
            Input::Equals => self.equals(),
            Input::Backspace => self.backspace(),
        }
        &self.display_value
    }

    /// Type a digit or the decimal marker.
    ///
    /// Other characters are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != DECIMAL_MARKER {
            tracing::debug!(?digit, "ignoring non-digit input");
            return;
        }

        if self.start_new_number {
            self.display_value.clear();
            if digit == DECIMAL_MARKER {
                self.display_value.push('0');
            }
            self.display_value.push(digit);
            self.start_new_number = false;
        } else if self.display_value == "0" && digit != DECIMAL_MARKER {
            self.display_value = digit.to_string();
        } else {
            self.display_value.push(digit);
        }
    }

    /// Type the decimal marker, at most once per number.
    pub fn input_decimal(&mut self) {
        if self.display_value.contains(DECIMAL_MARKER) {
            return;
        }
        self.input_digit(DECIMAL_MARKER);
    }

    /// Choose the next operator, computing the pending operation first when a
    /// second operand has been typed.
    pub fn handle_operator(&mut self, next: Operator) {
        let input_value = parse_display(&self.display_value);

        if self.pending_second_operand() {
            // Changing your mind about the operator computes nothing
            self.operator = Some(next);
            return;
        }

        match (self.first_operand, self.operator) {
            (None, _) => self.first_operand = Some(input_value),
            (Some(first), Some(op)) => {
                let result = round_to(op.apply(first, input_value), self.precision);
                self.display_value = format_number(result);
                self.first_operand = Some(parse_display(&self.display_value));
                tracing::debug!(%op, first, input_value, result, "applied operator");
            }
            // Right after equals: the shown result stays the first operand
            (Some(_), None) => {}
        }

        self.start_new_number = true;
        self.operator = Some(next);
    }

    /// Finish the pending operation, if any.
    pub fn equals(&mut self) {
        if let Some(op) = self.operator {
            self.handle_operator(op);
            self.operator = None;
        }
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.display_value = "0".to_string();
        self.first_operand = None;
        self.operator = None;
        self.start_new_number = false;
    }

    /// Delete the last character of the display.
    pub fn backspace(&mut self) {
        if is_special(&self.display_value) {
            self.display_value = "0".to_string();
            return;
        }

        self.display_value.pop();
        if self.display_value.is_empty() || self.display_value == "-" {
            self.display_value = "0".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, keys: &str) {
        for c in keys.chars() {
            let input = match c {
                '.' => Input::Decimal,
                '=' => Input::Equals,
                'C' => Input::Clear,
                '<' => Input::Backspace,
                _ => match Operator::from_symbol(c) {
                    Some(op) => Input::Operator(op),
                    None => Input::Digit(c),
                },
            };
            calc.handle(input);
        }
    }

    fn run(keys: &str) -> Calculator {
        let mut calc = Calculator::new();
        press(&mut calc, keys);
        calc
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(
            calc.state(),
            CalculatorState {
                display_value: "0".to_string(),
                first_operand: None,
                pending_second_operand: false,
                operator: None,
            }
        );
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run("123").display_value(), "123");
        assert_eq!(run("9087").display_value(), "9087");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        assert_eq!(run("0").display_value(), "0");
        assert_eq!(run("007").display_value(), "7");
    }

    #[test]
    fn test_zero_kept_before_decimal() {
        assert_eq!(run("0.5").display_value(), "0.5");
        assert_eq!(run(".5").display_value(), "0.5");
    }

    #[test]
    fn test_decimal_is_idempotent() {
        let mut calc = run("3.");
        assert_eq!(calc.display_value(), "3.");
        calc.input_decimal();
        assert_eq!(calc.display_value(), "3.");
        press(&mut calc, "1.4");
        assert_eq!(calc.display_value(), "3.14");
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut calc = run("4");
        calc.input_digit('x');
        assert_eq!(calc.display_value(), "4");
    }

    #[test]
    fn test_addition() {
        assert_eq!(run("5+3=").display_value(), "8");
    }

    #[test]
    fn test_all_operators() {
        assert_eq!(run("9-12=").display_value(), "-3");
        assert_eq!(run("2.5*4=").display_value(), "10");
        assert_eq!(run("7/2=").display_value(), "3.5");
    }

    #[test]
    fn test_sum_is_rounded() {
        assert_eq!(run(".1+.2=").display_value(), "0.3");
        assert_eq!(run("1/3=").display_value(), "0.33333333");
    }

    #[test]
    fn test_precision_is_configurable() {
        let mut calc = Calculator::with_precision(2);
        press(&mut calc, "2/3=");
        assert_eq!(calc.display_value(), "0.67");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(run("6/0=").display_value(), "Infinity");
        assert_eq!(run("0/0=").display_value(), "NaN");
    }

    #[test]
    fn test_operator_replaced_before_second_operand() {
        let mut calc = run("2+");
        calc.handle_operator(Operator::Add);
        assert_eq!(calc.operator(), Some(Operator::Add));
        assert_eq!(calc.first_operand(), Some(2.0));
        press(&mut calc, "3=");
        assert_eq!(calc.display_value(), "5");

        assert_eq!(run("8+-3=").display_value(), "5");
    }

    #[test]
    fn test_chained_operators_compute_left_to_right() {
        let mut calc = run("2+3*");
        assert_eq!(calc.display_value(), "5");
        assert_eq!(calc.first_operand(), Some(5.0));
        assert_eq!(calc.operator(), Some(Operator::Multiply));
        press(&mut calc, "4=");
        assert_eq!(calc.display_value(), "20");
    }

    #[test]
    fn test_pending_flag_tracks_operator() {
        let mut calc = run("2+");
        assert!(calc.pending_second_operand());
        press(&mut calc, "3");
        assert!(!calc.pending_second_operand());
        press(&mut calc, "=");
        assert_eq!(calc.operator(), None);
        assert!(!calc.pending_second_operand());
    }

    #[test]
    fn test_digit_after_equals_starts_new_number() {
        let mut calc = run("5+3=");
        press(&mut calc, "2");
        assert_eq!(calc.display_value(), "2");
    }

    #[test]
    fn test_operator_after_equals_continues_from_result() {
        assert_eq!(run("5+3=+2=").display_value(), "10");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let calc = run("42=");
        assert_eq!(calc.display_value(), "42");
        assert_eq!(calc.first_operand(), None);
    }

    #[test]
    fn test_decimal_ignored_while_display_has_marker() {
        // The stale "1.5" still holds a marker, so the next digit replaces it
        assert_eq!(run("1.5+.").display_value(), "1.5");
        assert_eq!(run("1.5+.5=").display_value(), "6.5");
    }

    #[test]
    fn test_decimal_starting_new_number_keeps_leading_zero() {
        // Deliberately "0." rather than a bare ".", so the display stays a
        // valid literal and "5+.=" gives 5 instead of NaN
        assert_eq!(run("5+.").display_value(), "0.");
        assert_eq!(run("5+.=").display_value(), "5");
        assert_eq!(run("5+.5=").display_value(), "5.5");
    }

    #[test]
    fn test_reset() {
        let mut calc = run("12+34");
        calc.reset();
        assert_eq!(calc.state(), Calculator::new().state());
        press(&mut calc, "7");
        assert_eq!(calc.display_value(), "7");
    }

    #[test]
    fn test_backspace() {
        assert_eq!(run("7<").display_value(), "0");
        assert_eq!(run("123<").display_value(), "12");
        assert_eq!(run("1.<").display_value(), "1");
        assert_eq!(run("2-5=<").display_value(), "0");
        assert_eq!(run("6/0=<").display_value(), "0");
    }

    #[test]
    fn test_backspace_keeps_operator() {
        let mut calc = run("9+4<");
        assert_eq!(calc.operator(), Some(Operator::Add));
        press(&mut calc, "1=");
        assert_eq!(calc.display_value(), "10");
    }

    #[test]
    fn test_infinity_propagates() {
        assert_eq!(run("6/0=+1=").display_value(), "Infinity");
        assert_eq!(run("6/0=*0=").display_value(), "NaN");
    }

    #[test]
    fn test_sum_matches_rounded_sum() {
        let pairs = [("12.75", "0.5"), ("99999", "1"), ("0.125", "3.3")];
        for (a, b) in pairs {
            let calc = run(&format!("{a}+{b}="));
            let expected = format_number(round_to(
                a.parse::<f64>().unwrap() + b.parse::<f64>().unwrap(),
                DEFAULT_PRECISION,
            ));
            assert_eq!(calc.display_value(), expected);
        }
    }
}
