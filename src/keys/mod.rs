//! Input adapters: turn raw keys, keypad clicks and key scripts into
//! calculator [`Input`].

mod keypad;
mod script;

pub use keypad::{CELL_WIDTH, Keypad};
pub use script::parse_script;

use crate::calculator::{DECIMAL_MARKER, Input, Operator};
use crossterm::event::{KeyCode, KeyEvent};

/// Classify a key by its DOM-style name (`"7"`, `"+"`, `"Enter"`, ...).
///
/// Returns `None` for keys the calculator does not react to.
pub fn classify_key(key: &str) -> Option<Input> {
    match key {
        "Enter" | "=" => return Some(Input::Equals),
        "Backspace" => return Some(Input::Backspace),
        "Delete" | "c" | "C" => return Some(Input::Clear),
        _ => {}
    }

    let mut chars = key.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if c == DECIMAL_MARKER {
        return Some(Input::Decimal);
    }
    if let Some(input) = Input::digit(c) {
        return Some(input);
    }
    // Only the ASCII symbols are keyboard operators
    if c.is_ascii() {
        return Operator::from_symbol(c).map(Input::Operator);
    }
    None
}

/// Name a terminal key event the way [`classify_key`] expects.
pub fn key_name(event: &KeyEvent) -> Option<String> {
    match event.code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Delete => Some("Delete".to_string()),
        KeyCode::Esc => Some("Escape".to_string()),
        _ => None,
    }
}
