//! Error types for fourcalc-tui
//!
//! Calculator errors never reach this level; they are shown in the error
//! overlay. What remains is configuration and terminal failures.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Configuration or logging setup error from the calculator library
    #[error("Setup error: {0}")]
    Setup(#[from] libfourcalc::FourcalcError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
