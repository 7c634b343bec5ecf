//! Concierge error types.

use thiserror::Error;

/// Errors raised by the concierge.
///
/// Only input errors reach callers of [`crate::ConciergeService`]; provider
/// failures are turned into a fallback reply there.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Message exceeds {0} characters")]
    MessageTooLong(usize),

    #[error("No API key configured for {0}")]
    MissingApiKey(String),

    #[error("Model provider failed: {0}")]
    Provider(String),
}

impl AiError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// True for errors caused by the user's message rather than the model.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AiError::EmptyMessage | AiError::MessageTooLong(_))
    }

    /// Stable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            AiError::EmptyMessage | AiError::MessageTooLong(_) => "INVALID_INPUT",
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
        }
    }
}
