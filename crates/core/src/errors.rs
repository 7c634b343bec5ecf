//! Core error types for the Wealthdeck dashboard.
//!
//! The core performs no I/O, so errors only come from configuration and user
//! input. Fallbacks that the dashboard resolves silently (unknown currency,
//! missing source asset, over-deduction) are not errors and never appear here.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Rejections of user-supplied form data.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown asset category '{0}'")]
    UnknownCategory(String),
}
