//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libfourcalc::config::{Config, UiConfig};
use libfourcalc::{Button, Calculator, Notifier, TextBuffer};
use ratatui::layout::Rect;

/// Notifier that raises the modal error overlay
///
/// Only the most recent message is kept; it stays up until dismissed.
#[derive(Debug, Clone, Default)]
pub struct OverlayNotifier {
    message: Option<String>,
}

impl OverlayNotifier {
    /// Message currently shown, if any
    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

impl Notifier for OverlayNotifier {
    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// The calculator, wired to an in-memory display and the error overlay
    pub calculator: Calculator<TextBuffer, OverlayNotifier>,

    /// Button pressed since the last tick, highlighted on the keypad
    pub pressed: Option<Button>,

    /// Last known terminal area, used to hit-test mouse clicks
    pub viewport: Rect,

    /// UI configuration
    pub config: UiConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(Config::default().with_env_overrides().ui)
    }
}

impl AppState {
    /// Create new application state, honoring environment overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create new application state with explicit UI settings
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            calculator: Calculator::new(TextBuffer::new(), OverlayNotifier::default()),
            pressed: None,
            viewport: Rect::default(),
            config,
        }
    }

    /// Error waiting to be acknowledged
    pub fn error(&self) -> Option<&str> {
        self.calculator.notifier().current()
    }

    /// Text in the calculator display
    pub fn display_text(&self) -> &str {
        self.calculator.display_text()
    }
}
