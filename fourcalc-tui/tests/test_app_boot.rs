//! Test application initialization
//!
//! Verifies that the app initializes with correct defaults
//! based on environment variables.

use fourcalc_tui::app::AppState;
use serial_test::serial;

#[test]
#[serial]
fn test_app_starts_with_empty_calculator() {
    let state = AppState::new();

    assert_eq!(state.display_text(), "");
    assert_eq!(state.calculator.session().pending_operand, None);
    assert_eq!(state.calculator.session().pending_operator, None);
    assert!(!state.calculator.session().display_should_reset);
}

#[test]
#[serial]
fn test_no_overlays_on_boot() {
    let state = AppState::new();

    assert!(!state.should_quit);
    assert!(!state.help_visible);
    assert!(state.error().is_none());
    assert!(state.pressed.is_none());
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("FOURCALC_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("FOURCALC_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_default_tick_rate() {
    std::env::remove_var("FOURCALC_TICK_MS");
    let state = AppState::new();

    assert_eq!(state.config.tick_rate_ms, 100);
}
