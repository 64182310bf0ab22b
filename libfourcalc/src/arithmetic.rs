//! Arithmetic dispatcher
//!
//! The four operators form a closed set, so dispatch is a plain enum match.
//! Everything here is pure: no state, no I/O, no logging.
//!
//! # Example
//!
//! ```
//! use libfourcalc::arithmetic::{compute, Operator};
//!
//! assert_eq!(compute("+", 5.0, 3.0).unwrap(), 8.0);
//! assert_eq!(Operator::Divide.apply(9.0, 3.0).unwrap(), 3.0);
//! assert!(compute("/", 1.0, 0.0).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// One of the four supported binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol identifying this operator (`+`, `-`, `*`, `/`)
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Look up an operator by its symbol character
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two operands
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when dividing by zero (either
    /// sign). Other operators never fail; overflow produces infinities the
    /// way native floating point does.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide if b == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Divide => Ok(a / b),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_char(c).ok_or_else(|| CalcError::UnsupportedOperator(s.to_string()))
            }
            _ => Err(CalcError::UnsupportedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Compute `a <symbol> b`
///
/// # Errors
///
/// - [`CalcError::UnsupportedOperator`] if `symbol` is not one of `+ - * /`
/// - [`CalcError::DivisionByZero`] for `/` with `b == 0`
pub fn compute(symbol: &str, a: f64, b: f64) -> Result<f64, CalcError> {
    symbol.parse::<Operator>()?.apply(a, b)
}

/// Parse display text as an operand
///
/// Parsing is lenient the way a browser's `parseFloat` is: leading
/// whitespace is skipped and the longest numeric prefix is used, so `"12abc"`
/// reads as `12` and `"1."` as `1`. `Infinity` and `inf` (with optional sign)
/// are accepted because they are what a previous overflow leaves on the
/// display.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] when no numeric prefix exists, which
/// covers the empty string, a lone `.` and `NaN`.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidInput(text.to_string());

    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if ["Infinity", "inf"].iter().any(|word| s[end..].starts_with(word)) {
        return Ok(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return Err(invalid());
    }

    // An exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let value: f64 = s[..end].parse().map_err(|_| invalid())?;
    if value.is_nan() {
        return Err(invalid());
    }
    Ok(value)
}

/// Render a result for the display
///
/// Uses the default `f64` formatting, which is the shortest representation
/// that parses back to the same value. NaN and infinities render as `NaN`,
/// `inf` and `-inf`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}
