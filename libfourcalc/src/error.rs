//! Error types for fourcalc

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FourcalcError>;

#[derive(Error, Debug)]
pub enum FourcalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by the arithmetic dispatcher and operand parsing.
///
/// These never leave the controller: it turns every one of them into a
/// user notification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input: {0:?}")]
    InvalidInput(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Unsupported operator: {0:?}")]
    UnsupportedOperator(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
