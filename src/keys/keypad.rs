//! On-screen keypad and pointer hit-testing.

use crate::calculator::{Input, Operator};

/// Width of one keypad cell in terminal columns.
pub const CELL_WIDTH: u16 = 5;

/// What a keypad button does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Digit(char),
    Decimal,
    Operator(Operator),
    Clear,
    Backspace,
    Equals,
}

/// A single keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub kind: ButtonKind,
}

impl Button {
    const fn new(label: &'static str, kind: ButtonKind) -> Self {
        Self { label, kind }
    }

    /// The calculator input produced by clicking this button.
    pub fn input(&self) -> Input {
        match self.kind {
            ButtonKind::Digit(d) => Input::Digit(d),
            ButtonKind::Decimal => Input::Decimal,
            ButtonKind::Operator(op) => Input::Operator(op),
            ButtonKind::Clear => Input::Clear,
            ButtonKind::Backspace => Input::Backspace,
            ButtonKind::Equals => Input::Equals,
        }
    }
}

const fn digit(label: &'static str, d: char) -> Button {
    Button::new(label, ButtonKind::Digit(d))
}

const fn op(op: Operator) -> Button {
    Button::new(op.label(), ButtonKind::Operator(op))
}

const LAYOUT: &[&[Button]] = &[
    &[
        Button::new("C", ButtonKind::Clear),
        Button::new("⌫", ButtonKind::Backspace),
        op(Operator::Divide),
        op(Operator::Multiply),
    ],
    &[digit("7", '7'), digit("8", '8'), digit("9", '9'), op(Operator::Subtract)],
    &[digit("4", '4'), digit("5", '5'), digit("6", '6'), op(Operator::Add)],
    &[
        digit("1", '1'),
        digit("2", '2'),
        digit("3", '3'),
        Button::new("=", ButtonKind::Equals),
    ],
    &[digit("0", '0'), Button::new(".", ButtonKind::Decimal)],
];

/// The keypad grid, anchored at a terminal position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keypad {
    /// Column of the left edge.
    pub left: u16,
    /// Row of the first button row.
    pub top: u16,
}

impl Keypad {
    pub fn new(left: u16, top: u16) -> Self {
        Self { left, top }
    }

    pub fn rows(&self) -> &'static [&'static [Button]] {
        LAYOUT
    }

    /// Total width in columns.
    pub fn width(&self) -> u16 {
        let widest = LAYOUT.iter().map(|row| row.len()).max().unwrap_or(0);
        widest as u16 * CELL_WIDTH
    }

    pub fn height(&self) -> u16 {
        LAYOUT.len() as u16
    }

    /// Find the button under an absolute terminal cell, if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<&'static Button> {
        let x = column.checked_sub(self.left)?;
        let y = row.checked_sub(self.top)?;
        LAYOUT
            .get(y as usize)?
            .get((x / CELL_WIDTH) as usize)
    }
}
