//! Wealthdeck AI - financial concierge chat using rig-core.
//!
//! # Architecture
//!
//! - `concierge`: Chat session front with history and reply fallbacks
//! - `provider`: Provider trait, the Gemini client and a fake for tests
//! - `types`: Shared DTOs used by the HTTP layer
//!
//! # Example
//!
//! ```ignore
//! use wealthdeck_ai::{ConciergeConfig, ConciergeService, GeminiConciergeProvider};
//!
//! let provider = GeminiConciergeProvider::new(api_key, "gemini-3-flash-preview");
//! let service = ConciergeService::new(Arc::new(provider), ConciergeConfig::default());
//!
//! let reply = service.send_message(ConciergeRequest {
//!     message: "How should I think about my cash position?".to_string(),
//!     history: service.initial_history(),
//! }).await?;
//! ```

pub mod concierge;
pub mod error;
pub mod provider;
pub mod types;

pub use concierge::{ConciergeConfig, ConciergeService};
pub use error::AiError;
pub use provider::{ConciergeProvider, FakeConciergeProvider, GeminiConciergeProvider};
pub use types::{
    ConciergeMessage, ConciergeReply, ConciergeRequest, ConciergeRole, CONCIERGE_GREETING,
    CONCIERGE_SYSTEM_INSTRUCTION, DEFAULT_CONCIERGE_MODEL, EMPTY_REPLY_FALLBACK,
    MAX_MESSAGE_CHARS, PROVIDER_FAILURE_REPLY,
};
