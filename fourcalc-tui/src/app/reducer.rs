//! Reducer function for state transitions
//!
//! `(State, Action) -> State`. The reducer owns every change to the
//! calculator; it does no terminal I/O.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use libfourcalc::map_key;
use ratatui::layout::Rect;

use super::actions::Action;
use super::event::calculator_key;
use super::state::AppState;
use crate::ui;

/// Reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),

        Action::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if state.error().is_some() => {
                reduce(state, Action::DismissError)
            }
            // The help popup covers the keypad; a click closes it
            MouseEventKind::Down(MouseButton::Left) if state.help_visible => {
                reduce(state, Action::HideHelp)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let keypad = ui::layout(state.viewport).keypad;
                match ui::keypad::button_at(keypad, mouse.column, mouse.row) {
                    Some(button) => reduce(state, Action::Press(button)),
                    None => state,
                }
            }
            _ => state,
        },

        Action::Tick => AppState {
            pressed: None,
            ..state
        },

        Action::Resize(width, height) => AppState {
            viewport: Rect::new(0, 0, width, height),
            ..state
        },

        // === Calculator ===
        Action::Press(button) => {
            // The error overlay is modal
            if state.error().is_some() {
                return state;
            }
            state.calculator.press(button);
            AppState {
                pressed: Some(button),
                ..state
            }
        }

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::DismissError => {
            state.calculator.notifier_mut().dismiss();
            state
        }
    }
}

/// Handle keyboard input
///
/// Front-end keys are checked first; everything else goes through the
/// calculator keymap.
fn handle_key(mut state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }

        // Dismiss error; nothing else gets through while it is shown
        (KeyCode::Esc | KeyCode::Enter, _) if state.error().is_some() => {
            return reduce(state, Action::DismissError);
        }
        _ if state.error().is_some() => return state,

        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    let key = calculator_key(&key);
    let pressed = map_key(key).map(|binding| binding.button);

    if state.calculator.handle_key(key).is_handled() {
        AppState { pressed, ..state }
    } else {
        state
    }
}
