//! Calculator inputs: keypad buttons and the keyboard mapping
//!
//! Front ends translate their own events into [`Button`] presses or [`Key`]s;
//! [`map_key`] is the single place keyboard shortcuts are defined.

use crate::arithmetic::Operator;

/// A keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// One of `0`-`9`
    Digit(char),
    /// The decimal point
    Decimal,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
}

impl Button {
    /// Keypad layout, row by row
    pub const KEYPAD: &'static [&'static [Button]] = &[
        &[Button::Clear, Button::Backspace, Button::Operator(Operator::Divide), Button::Operator(Operator::Multiply)],
        &[Button::Digit('7'), Button::Digit('8'), Button::Digit('9'), Button::Operator(Operator::Subtract)],
        &[Button::Digit('4'), Button::Digit('5'), Button::Digit('6'), Button::Operator(Operator::Add)],
        &[Button::Digit('1'), Button::Digit('2'), Button::Digit('3'), Button::Equals],
        &[Button::Digit('0'), Button::Decimal],
    ];

    /// The character this button enters, for digit, decimal and operator buttons
    pub fn value(self) -> Option<char> {
        match self {
            Button::Digit(d) => Some(d),
            Button::Decimal => Some('.'),
            Button::Operator(op) => Some(op.symbol()),
            Button::Equals | Button::Backspace | Button::Clear => None,
        }
    }

    /// Text printed on the button
    pub fn label(self) -> String {
        match self {
            Button::Equals => "=".to_string(),
            Button::Backspace => "DEL".to_string(),
            Button::Clear => "C".to_string(),
            other => other.value().map(String::from).unwrap_or_default(),
        }
    }
}

/// A key press, independent of any terminal or windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    /// Anything the calculator has no binding for
    Other,
}

/// What a key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub button: Button,
    /// The front end should swallow the key instead of running its own
    /// default behavior for it
    pub suppress_default: bool,
}

impl KeyBinding {
    fn new(button: Button) -> Self {
        Self {
            button,
            suppress_default: false,
        }
    }

    fn suppressing(button: Button) -> Self {
        Self {
            button,
            suppress_default: true,
        }
    }
}

/// Result of feeding a key to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key has no calculator binding
    Ignored,
    Handled { suppress_default: bool },
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        matches!(self, KeyOutcome::Handled { .. })
    }
}

/// Map a key to the button it stands for
///
/// - `0`-`9` and `.`: digit entry
/// - `+ - * /`: operator selection
/// - `Enter` or `=`: compute (suppresses default)
/// - `Backspace`: delete last character (suppresses default)
/// - `c` or `C`: clear
pub fn map_key(key: Key) -> Option<KeyBinding> {
    match key {
        Key::Char(d @ '0'..='9') => Some(KeyBinding::new(Button::Digit(d))),
        Key::Char('.') => Some(KeyBinding::new(Button::Decimal)),
        Key::Char('=') | Key::Enter => Some(KeyBinding::suppressing(Button::Equals)),
        Key::Backspace => Some(KeyBinding::suppressing(Button::Backspace)),
        Key::Char('c' | 'C') => Some(KeyBinding::new(Button::Clear)),
        Key::Char(symbol) => Operator::from_char(symbol).map(|op| KeyBinding::new(Button::Operator(op))),
        Key::Other => None,
    }
}
