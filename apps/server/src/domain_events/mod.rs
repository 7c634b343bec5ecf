//! Domain events runtime bridge for the web server.
//!
//! The dashboard state emits events after every mutation. The server has no
//! background work to trigger, so events are written to the trace log as
//! structured records under the `wealthdeck::events` target.

use wealthdeck_core::events::{DomainEvent, DomainEventSink};

/// Sink that records each domain event in the trace log.
#[derive(Clone, Default)]
pub struct TracingDomainEventSink;

impl TracingDomainEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl DomainEventSink for TracingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => {
                tracing::info!(target: "wealthdeck::events", event = %payload, "Domain event")
            }
            Err(e) => tracing::warn!(
                target: "wealthdeck::events",
                "Failed to serialize domain event {:?}: {}",
                event,
                e
            ),
        }
    }
}
