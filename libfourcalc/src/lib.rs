//! fourcalc - a four-function calculator
//!
//! This library provides the arithmetic dispatcher and the interaction
//! controller behind the fourcalc front ends. The controller never talks to a
//! UI directly: it is handed a display surface and a notifier at construction.

pub mod arithmetic;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod notify;

// Re-export commonly used types
pub use arithmetic::{compute, Operator};
pub use config::Config;
pub use controller::{Calculator, Session};
pub use display::{DisplaySurface, TextBuffer};
pub use error::{CalcError, FourcalcError, Result};
pub use input::{map_key, Button, Key, KeyBinding, KeyOutcome};
pub use notify::{Notifier, RecordingNotifier};
