//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::{KeyEvent, MouseEvent};
use libfourcalc::Button;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Periodic tick, clears the pressed-button highlight
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Calculator ===
    /// A keypad button was pressed, by click or by its key
    Press(Button),

    // === Application ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Dismiss error overlay
    DismissError,
}
