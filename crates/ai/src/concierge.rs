//! Concierge chat session - history tracking and reply fallbacks.

use std::sync::Arc;

use log::{debug, error, warn};

use crate::error::AiError;
use crate::provider::ConciergeProvider;
use crate::types::{
    ConciergeMessage, ConciergeReply, ConciergeRequest, CONCIERGE_GREETING,
    CONCIERGE_SYSTEM_INSTRUCTION, EMPTY_REPLY_FALLBACK, MAX_MESSAGE_CHARS,
    PROVIDER_FAILURE_REPLY,
};

/// Configuration for the concierge.
#[derive(Debug, Clone)]
pub struct ConciergeConfig {
    pub system_instruction: String,
    pub greeting: String,
    pub max_message_chars: usize,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            system_instruction: CONCIERGE_SYSTEM_INSTRUCTION.to_string(),
            greeting: CONCIERGE_GREETING.to_string(),
            max_message_chars: MAX_MESSAGE_CHARS,
        }
    }
}

/// Stateless chat front for a [`ConciergeProvider`].
///
/// The caller owns the history and passes it with every message. Provider
/// failures never surface as errors: the user sees an apology and the
/// failure is logged.
pub struct ConciergeService {
    provider: Arc<dyn ConciergeProvider>,
    config: ConciergeConfig,
}

impl ConciergeService {
    pub fn new(provider: Arc<dyn ConciergeProvider>, config: ConciergeConfig) -> Self {
        Self { provider, config }
    }

    /// Opening line of a new conversation.
    pub fn greeting(&self) -> &str {
        &self.config.greeting
    }

    /// History of a new conversation: just the greeting.
    pub fn initial_history(&self) -> Vec<ConciergeMessage> {
        vec![ConciergeMessage::model(&self.config.greeting)]
    }

    /// Sends `request.message` and returns the reply with the extended history.
    ///
    /// Only input validation fails; a blank message is rejected.
    pub async fn send_message(
        &self,
        request: ConciergeRequest,
    ) -> Result<ConciergeReply, AiError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(AiError::EmptyMessage);
        }
        if message.chars().count() > self.config.max_message_chars {
            return Err(AiError::MessageTooLong(self.config.max_message_chars));
        }

        debug!(
            "Concierge request to {} ({} turns of history)",
            self.provider.model(),
            request.history.len()
        );

        let (reply, generated) = match self
            .provider
            .complete(&self.config.system_instruction, &request.history, message)
            .await
        {
            Ok(text) if text.trim().is_empty() => {
                warn!("Concierge model {} returned an empty reply", self.provider.model());
                (EMPTY_REPLY_FALLBACK.to_string(), false)
            }
            Ok(text) => (text, true),
            Err(e) => {
                error!("Concierge request failed [{}]: {}", e.code(), e);
                (PROVIDER_FAILURE_REPLY.to_string(), false)
            }
        };

        let mut history = request.history;
        history.push(ConciergeMessage::user(message));
        history.push(ConciergeMessage::model(&reply));

        Ok(ConciergeReply {
            reply,
            history,
            generated,
        })
    }
}
