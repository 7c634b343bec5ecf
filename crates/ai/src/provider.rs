//! Generative model providers for the concierge.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{
    client::CompletionClient,
    completion::{Chat, Message},
    message::{AssistantContent, Text, UserContent},
    providers::gemini,
    OneOrMany,
};

use crate::error::AiError;
use crate::types::{ConciergeMessage, ConciergeRole};

// ============================================================================
// Provider Trait
// ============================================================================

/// A model that turns a conversation into the next reply.
#[async_trait]
pub trait ConciergeProvider: Send + Sync {
    /// Model identifier, for logs.
    fn model(&self) -> &str;

    /// Generates the reply to `message` given the earlier turns.
    async fn complete(
        &self,
        system_instruction: &str,
        history: &[ConciergeMessage],
        message: &str,
    ) -> Result<String, AiError>;
}

/// Converts concierge turns into rig messages, preserving order.
pub(crate) fn to_rig_history(history: &[ConciergeMessage]) -> Vec<Message> {
    history
        .iter()
        .map(|msg| match msg.role {
            ConciergeRole::User => Message::User {
                content: OneOrMany::one(UserContent::Text(Text {
                    text: msg.text.clone(),
                })),
            },
            ConciergeRole::Model => Message::Assistant {
                id: None,
                content: OneOrMany::one(AssistantContent::Text(Text {
                    text: msg.text.clone(),
                })),
            },
        })
        .collect()
}

// ============================================================================
// Gemini
// ============================================================================

/// Google Gemini through rig-core.
pub struct GeminiConciergeProvider {
    api_key: Option<String>,
    model: String,
}

impl GeminiConciergeProvider {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl ConciergeProvider for GeminiConciergeProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        system_instruction: &str,
        history: &[ConciergeMessage],
        message: &str,
    ) -> Result<String, AiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::MissingApiKey("gemini".to_string()))?;
        let client: gemini::Client<HttpClient> =
            gemini::Client::new(key).map_err(|e| AiError::Provider(e.to_string()))?;

        debug!(
            "Sending concierge message to {} with {} prior turns",
            self.model,
            history.len()
        );

        let prompt = Message::User {
            content: OneOrMany::one(UserContent::Text(Text {
                text: message.to_string(),
            })),
        };

        client
            .agent(&self.model)
            .preamble(system_instruction)
            .build()
            .chat(prompt, to_rig_history(history))
            .await
            .map_err(|e| AiError::Provider(e.to_string()))
    }
}

// ============================================================================
// Fake Provider for Testing
// ============================================================================

enum FakeBehavior {
    Reply(String),
    Echo,
    Fail(String),
}

/// A fake provider that returns deterministic replies and records prompts.
pub struct FakeConciergeProvider {
    behavior: FakeBehavior,
    received: Mutex<Vec<(usize, String)>>,
}

impl FakeConciergeProvider {
    fn with_behavior(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Always answers `reply`.
    pub fn with_reply(reply: &str) -> Self {
        Self::with_behavior(FakeBehavior::Reply(reply.to_string()))
    }

    /// Answers with the user's own message.
    pub fn echo() -> Self {
        Self::with_behavior(FakeBehavior::Echo)
    }

    /// Always fails with a provider error.
    pub fn failing(reason: &str) -> Self {
        Self::with_behavior(FakeBehavior::Fail(reason.to_string()))
    }

    /// `(history length, message)` for every call so far.
    pub fn received(&self) -> Vec<(usize, String)> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ConciergeProvider for FakeConciergeProvider {
    fn model(&self) -> &str {
        "fake"
    }

    async fn complete(
        &self,
        _system_instruction: &str,
        history: &[ConciergeMessage],
        message: &str,
    ) -> Result<String, AiError> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((history.len(), message.to_string()));

        match &self.behavior {
            FakeBehavior::Reply(reply) => Ok(reply.clone()),
            FakeBehavior::Echo => Ok(message.to_string()),
            FakeBehavior::Fail(reason) => Err(AiError::provider(reason.clone())),
        }
    }
}
