//! Where the dashboard state sends its domain events.

use super::DomainEvent;

/// Receives the events the dashboard state emits after each completed write.
///
/// Emission is best-effort and must not block; a sink never fails a write.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);

    /// Emits `events` in order.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Sink installed until a caller provides one; drops every event.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

#[cfg(test)]
pub use recording::RecordingEventSink;
