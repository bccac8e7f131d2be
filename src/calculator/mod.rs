//! Calculator module implementing the keypad state machine.
//!
//! This module provides functionality to:
//! - Feed classified key input into a four-function calculator
//! - Format and parse the single-line display
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod format;
mod input;
mod operator;

pub use clipboard::copy_result;
pub use engine::{Calculator, DEFAULT_PRECISION};
pub use format::MAX_PRECISION;
pub use input::{DECIMAL_MARKER, Input};
pub use operator::Operator;
