//! Normalized calculator input.

use super::operator::Operator;

/// The decimal marker accepted by the calculator.
pub const DECIMAL_MARKER: char = '.';

/// A single input event, already classified by whichever adapter produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// An ASCII digit `0`-`9`.
    Digit(char),
    /// The decimal marker.
    Decimal,
    /// An arithmetic operator.
    Operator(Operator),
    /// Reset everything.
    Clear,
    /// Finish the pending computation.
    Equals,
    /// Delete the last character of the display.
    Backspace,
}

impl Input {
    /// Build a digit input, rejecting anything that is not `0`-`9`.
    pub fn digit(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Self::Digit(c))
    }

    /// Whether this input finishes a computation.
    pub fn is_equals(&self) -> bool {
        matches!(self, Self::Equals)
    }
}
