//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to calculator
//! operations and overlay handling through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fourcalc_tui::app::{reduce, Action, AppState};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press_char(state: AppState, c: char) -> AppState {
    let modifiers = if c.is_ascii_uppercase() || "+*".contains(c) {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    reduce(state, Action::Key(key_event(KeyCode::Char(c), modifiers)))
}

fn type_keys(mut state: AppState, keys: &str) -> AppState {
    for c in keys.chars() {
        state = press_char(state, c);
    }
    state
}

#[test]
fn test_q_quits_application() {
    let state = press_char(AppState::new(), 'q');
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_quits_instead_of_clearing() {
    let state = type_keys(AppState::new(), "12");
    let state = reduce(state, Action::Key(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)));

    assert!(state.should_quit);
    assert_eq!(state.display_text(), "12");
}

#[test]
fn test_digits_and_operators_compute() {
    let state = type_keys(AppState::new(), "5+3");
    let state = reduce(state, Action::Key(key_event(KeyCode::Enter, KeyModifiers::NONE)));

    assert_eq!(state.display_text(), "8");
}

#[test]
fn test_equals_key_computes() {
    let state = type_keys(AppState::new(), "6*7=");
    assert_eq!(state.display_text(), "42");
}

#[test]
fn test_backspace_key_deletes() {
    let state = type_keys(AppState::new(), "123");
    let backspace = key_event(KeyCode::Backspace, KeyModifiers::NONE);
    let state = reduce(state, Action::Key(backspace));
    let state = reduce(state, Action::Key(backspace));

    assert_eq!(state.display_text(), "1");
}

#[test]
fn test_c_and_shift_c_clear() {
    let state = type_keys(AppState::new(), "9+2c");
    assert_eq!(state.display_text(), "");
    assert_eq!(state.calculator.session().pending_operator, None);

    let state = type_keys(state, "4C");
    assert_eq!(state.display_text(), "");
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let f1 = key_event(KeyCode::F(1), KeyModifiers::NONE);
    let state = reduce(state, Action::Key(f1));
    assert!(state.help_visible);

    let state = reduce(state, Action::Key(f1));
    assert!(!state.help_visible);
}

#[test]
fn test_esc_hides_help() {
    let state = reduce(AppState::new(), Action::ShowHelp);
    let state = reduce(state, Action::Key(key_event(KeyCode::Esc, KeyModifiers::NONE)));
    assert!(!state.help_visible);
}

#[test]
fn test_error_overlay_is_modal() {
    let state = type_keys(AppState::new(), "7/0=");
    assert!(state.error().is_some());
    assert_eq!(state.display_text(), "");

    // Input is swallowed while the overlay is up
    let state = type_keys(state, "5");
    assert_eq!(state.display_text(), "");
    assert!(state.error().is_some());

    // Enter dismisses without computing
    let state = reduce(state, Action::Key(key_event(KeyCode::Enter, KeyModifiers::NONE)));
    assert!(state.error().is_none());

    let state = type_keys(state, "5");
    assert_eq!(state.display_text(), "5");
}

#[test]
fn test_esc_dismisses_error() {
    let state = type_keys(AppState::new(), "+");
    assert!(state.error().is_some());

    let state = reduce(state, Action::Key(key_event(KeyCode::Esc, KeyModifiers::NONE)));
    assert!(state.error().is_none());
}

#[test]
fn test_q_quits_even_with_error_shown() {
    let state = type_keys(AppState::new(), "+");
    let state = press_char(state, 'q');
    assert!(state.should_quit);
}

#[test]
fn test_unbound_keys_change_nothing() {
    let state = type_keys(AppState::new(), "4");
    let state = type_keys(state, "x%");
    let state = reduce(state, Action::Key(key_event(KeyCode::Tab, KeyModifiers::NONE)));

    assert_eq!(state.display_text(), "4");
    assert!(state.error().is_none());
}
