//! Interaction controller
//!
//! [`Calculator`] owns the session state and the display handle. Every input
//! runs to completion synchronously: it mutates the session, maybe calls the
//! arithmetic dispatcher, and writes the display. Errors never escape; they
//! are handed to the injected [`Notifier`].
//!
//! # Example
//!
//! ```
//! use libfourcalc::{Calculator, Operator, RecordingNotifier, TextBuffer};
//!
//! let mut calc = Calculator::new(TextBuffer::new(), RecordingNotifier::new());
//! calc.append_digit('5');
//! calc.select_operator(Operator::Add);
//! calc.append_digit('3');
//! calc.compute_result();
//! assert_eq!(calc.display_text(), "8");
//! ```

use tracing::{debug, warn};

use crate::arithmetic::{format_number, parse_operand, Operator};
use crate::display::DisplaySurface;
use crate::error::CalcError;
use crate::input::{map_key, Button, Key, KeyOutcome};
use crate::notify::Notifier;

/// Transient state of one calculation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Session {
    /// First operand, captured when an operator was chosen
    pub pending_operand: Option<f64>,

    /// Operator awaiting its second operand
    pub pending_operator: Option<Operator>,

    /// Next digit starts a fresh buffer instead of appending
    pub display_should_reset: bool,
}

/// Four-function calculator bound to a display and a notifier
#[derive(Debug, Clone)]
pub struct Calculator<D, N> {
    session: Session,
    display: D,
    notifier: N,
}

impl<D: DisplaySurface, N: Notifier> Calculator<D, N> {
    /// Build a calculator around its UI collaborators
    ///
    /// The session starts empty. The display is left as handed in.
    pub fn new(display: D, notifier: N) -> Self {
        Self {
            session: Session::default(),
            display,
            notifier,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Enter a digit or the decimal point
    ///
    /// Characters other than `0`-`9` and `.` are ignored. A second decimal
    /// point in the same buffer is ignored.
    pub fn append_digit(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || ch == '.') {
            debug!(ch = %ch, "ignoring non-digit input");
            return;
        }

        if self.session.display_should_reset {
            self.display.clear();
            self.session.display_should_reset = false;
        }

        if ch == '.' && self.display.text().contains('.') {
            debug!("ignoring second decimal point");
            return;
        }

        self.display.push(ch);
    }

    /// Choose the operator, taking the display as the first operand
    ///
    /// If the display does not hold a number the user is notified and the
    /// session is left alone.
    pub fn select_operator(&mut self, op: Operator) {
        let operand = match parse_operand(self.display.text()) {
            Ok(value) => value,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        debug!(operand, operator = %op, "operator selected");
        self.session.pending_operand = Some(operand);
        self.session.pending_operator = Some(op);
        self.session.display_should_reset = true;
    }

    /// Apply the pending operator to the pending operand and the display
    ///
    /// Does nothing without a pending operation. An unparseable display keeps
    /// the pending operation; an arithmetic failure clears everything.
    pub fn compute_result(&mut self) {
        let (Some(first), Some(op)) = (self.session.pending_operand, self.session.pending_operator)
        else {
            debug!("compute requested with nothing pending");
            return;
        };

        let second = match parse_operand(self.display.text()) {
            Ok(value) => value,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        match op.apply(first, second) {
            Ok(result) => {
                debug!(first, operator = %op, second, result, "computed");
                self.display.set_text(format_number(result));
                self.session.pending_operand = None;
                self.session.pending_operator = None;
                self.session.display_should_reset = true;
            }
            Err(e) => {
                self.report(&e);
                self.reset();
            }
        }
    }

    /// Drop the last character of the display
    pub fn delete_last_char(&mut self) {
        self.display.pop();
    }

    /// Return to the initial state: empty display, nothing pending
    pub fn reset(&mut self) {
        self.display.clear();
        self.session = Session::default();
    }

    /// Run the operation behind a keypad button
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Digit(d) => self.append_digit(d),
            Button::Decimal => self.append_digit('.'),
            Button::Operator(op) => self.select_operator(op),
            Button::Equals => self.compute_result(),
            Button::Backspace => self.delete_last_char(),
            Button::Clear => self.reset(),
        }
    }

    /// Run the operation bound to a key, if any
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match map_key(key) {
            Some(binding) => {
                self.press(binding.button);
                KeyOutcome::Handled {
                    suppress_default: binding.suppress_default,
                }
            }
            None => KeyOutcome::Ignored,
        }
    }

    fn report(&mut self, error: &CalcError) {
        warn!(error = %error, display = self.display.text(), "calculator error");
        self.notifier.notify(&format!("Error: {}", error));
    }
}
