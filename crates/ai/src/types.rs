//! Shared concierge types - chat messages, requests and replies.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Model used when none is configured.
pub const DEFAULT_CONCIERGE_MODEL: &str = "gemini-3-flash-preview";

/// Standing instruction sent with every conversation.
pub const CONCIERGE_SYSTEM_INSTRUCTION: &str = "You are a sophisticated AI financial concierge \
for an exclusive wealth management app. You have access to general financial knowledge. Be \
concise, professional, and helpful.";

/// First message shown in a fresh conversation.
pub const CONCIERGE_GREETING: &str = "Hello! I'm your dedicated financial concierge. I can \
analyze your portfolio, suggest allocations, or answer market questions. How can I assist?";

/// Reply used when the model returns no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't generate a response.";

/// Reply used when the provider call fails.
pub const PROVIDER_FAILURE_REPLY: &str =
    "I apologize, but I am unable to process your request at this moment.";

/// Maximum accepted length of a single user message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4_000;

// ============================================================================
// Messages
// ============================================================================

/// Who sent a concierge message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConciergeRole {
    User,
    Model,
}

impl std::fmt::Display for ConciergeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConciergeRole::User => write!(f, "user"),
            ConciergeRole::Model => write!(f, "model"),
        }
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConciergeMessage {
    pub role: ConciergeRole,
    pub text: String,
}

impl ConciergeMessage {
    /// Create a new user message.
    pub fn user(text: &str) -> Self {
        Self {
            role: ConciergeRole::User,
            text: text.to_string(),
        }
    }

    /// Create a new model message.
    pub fn model(text: &str) -> Self {
        Self {
            role: ConciergeRole::Model,
            text: text.to_string(),
        }
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// A user message plus the conversation so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConciergeRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConciergeMessage>,
}

/// The reply and the history extended with both new turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConciergeReply {
    pub reply: String,
    pub history: Vec<ConciergeMessage>,
    /// False when the reply is one of the fallback texts.
    pub generated: bool,
}
