//! End-to-end calculator sessions
//!
//! Drives the controller the way a front end does, through key presses and
//! button presses, with a recording notifier standing in for the UI.

use libfourcalc::{
    Button, Calculator, Key, KeyOutcome, Operator, RecordingNotifier, Session, TextBuffer,
};

type TestCalculator = Calculator<TextBuffer, RecordingNotifier>;

fn fresh() -> TestCalculator {
    Calculator::new(TextBuffer::new(), RecordingNotifier::new())
}

fn type_keys(calc: &mut TestCalculator, keys: &str) {
    for ch in keys.chars() {
        calc.handle_key(Key::Char(ch));
    }
}

#[test]
fn test_five_plus_three_shows_eight() {
    let mut calc = fresh();
    type_keys(&mut calc, "5+3");
    calc.handle_key(Key::Enter);

    assert_eq!(calc.display_text(), "8");
    assert!(calc.notifier().messages().is_empty());
}

#[test]
fn test_divide_by_zero_notifies_and_clears() {
    let mut calc = fresh();
    type_keys(&mut calc, "7/0=");

    assert_eq!(calc.notifier().messages().len(), 1);
    assert!(calc.notifier().last().unwrap().contains("divide by zero"));
    assert_eq!(calc.display_text(), "");
    assert_eq!(*calc.session(), Session::default());
}

#[test]
fn test_second_decimal_point_is_ignored() {
    let mut calc = fresh();
    type_keys(&mut calc, "1..5");

    assert_eq!(calc.display_text(), "1.5");
}

#[test]
fn test_digit_after_operator_starts_new_buffer() {
    let mut calc = fresh();
    type_keys(&mut calc, "9+2");

    assert_eq!(calc.display_text(), "2");
    assert_eq!(calc.session().pending_operand, Some(9.0));
    assert_eq!(calc.session().pending_operator, Some(Operator::Add));
}

#[test]
fn test_backspace_twice() {
    let mut calc = fresh();
    type_keys(&mut calc, "123");
    calc.handle_key(Key::Backspace);
    calc.handle_key(Key::Backspace);

    assert_eq!(calc.display_text(), "1");
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = fresh();
    type_keys(&mut once, "4*6");
    once.reset();

    let mut twice = fresh();
    type_keys(&mut twice, "4*6");
    twice.reset();
    twice.reset();

    assert_eq!(once.display_text(), twice.display_text());
    assert_eq!(once.session(), twice.session());
    assert_eq!(*twice.session(), Session::default());
    assert_eq!(twice.display_text(), "");
}

#[test]
fn test_clear_key_resets_mid_operation() {
    let mut calc = fresh();
    type_keys(&mut calc, "8-3C");

    assert_eq!(calc.display_text(), "");
    assert_eq!(*calc.session(), Session::default());
}

#[test]
fn test_operator_on_empty_display_is_rejected() {
    let mut calc = fresh();
    type_keys(&mut calc, "+");

    assert_eq!(calc.notifier().messages().len(), 1);
    assert_eq!(calc.session().pending_operator, None);
}

#[test]
fn test_equals_without_pending_operation_does_nothing() {
    let mut calc = fresh();
    type_keys(&mut calc, "12=");

    assert_eq!(calc.display_text(), "12");
    assert!(calc.notifier().messages().is_empty());
}

#[test]
fn test_floating_point_result_uses_shortest_representation() {
    let mut calc = fresh();
    type_keys(&mut calc, ".1+.2=");

    assert_eq!(calc.display_text(), "0.30000000000000004");
}

#[test]
fn test_non_terminating_division() {
    let mut calc = fresh();
    type_keys(&mut calc, "1/3=");

    assert_eq!(calc.display_text(), "0.3333333333333333");
}

#[test]
fn test_negative_result_chains_into_next_operation() {
    let mut calc = fresh();
    type_keys(&mut calc, "2-5=*4=");

    assert_eq!(calc.display_text(), "-12");
}

#[test]
fn test_key_outcomes() {
    let mut calc = fresh();

    assert_eq!(
        calc.handle_key(Key::Enter),
        KeyOutcome::Handled { suppress_default: true }
    );
    assert_eq!(
        calc.handle_key(Key::Char('=')),
        KeyOutcome::Handled { suppress_default: true }
    );
    assert_eq!(
        calc.handle_key(Key::Char('c')),
        KeyOutcome::Handled { suppress_default: false }
    );
    assert!(!calc.handle_key(Key::Other).is_handled());
}

#[test]
fn test_buttons_and_keys_are_interchangeable() {
    let mut by_keys = fresh();
    type_keys(&mut by_keys, "6*7=");

    let mut by_buttons = fresh();
    for button in [
        Button::Digit('6'),
        Button::Operator(Operator::Multiply),
        Button::Digit('7'),
        Button::Equals,
    ] {
        by_buttons.press(button);
    }

    assert_eq!(by_keys.display_text(), "42");
    assert_eq!(by_buttons.display_text(), "42");
}

#[test]
fn test_error_after_failed_divide_allows_fresh_start() {
    let mut calc = fresh();
    type_keys(&mut calc, "7/0=");
    type_keys(&mut calc, "3+4=");

    assert_eq!(calc.display_text(), "7");
    assert_eq!(calc.notifier().messages().len(), 1);
}
