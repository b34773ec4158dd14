//! Audit trail for validator runs.
//!
//! The registry records one event per webhook call, whether the action ran or
//! was turned away. Sinks decide where events go; the server logs them.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Completed,
    Rejected,
}

/// Who asked for a run, carried from the request into each event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditContext {
    /// Conversation the request belongs to, as identified by the host.
    pub sender_id: Option<String>,
    pub correlation_id: String,
    pub actor: String,
}

impl AuditContext {
    pub fn new(
        sender_id: Option<String>,
        correlation_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self { sender_id, correlation_id: correlation_id.into(), actor: actor.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub event_id: String,
    pub event_type: String,
    pub action: String,
    pub outcome: AuditOutcome,
    pub context: AuditContext,
    pub metadata: BTreeMap<String, String>,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn validation_completed(context: &AuditContext, action: &str) -> Self {
        Self::for_action(context, "validation.completed", action, AuditOutcome::Completed)
    }

    pub fn validation_rejected(context: &AuditContext, action: &str) -> Self {
        Self::for_action(context, "validation.rejected", action, AuditOutcome::Rejected)
    }

    fn for_action(
        context: &AuditContext,
        event_type: &str,
        action: &str,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            event_type: event_type.to_owned(),
            action: action.to_owned(),
            outcome,
            context: context.clone(),
            metadata: BTreeMap::new(),
            occurred_at: Utc::now(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata.insert(key.to_owned(), value.into());
        self
    }
}

pub trait AuditSink: Send + Sync {
    fn emit(&self, event: AuditEvent);
}

/// Keeps events in memory for inspection.
#[derive(Clone, Default)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl InMemoryAuditSink {
    pub fn events(&self) -> Vec<AuditEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AuditSink for InMemoryAuditSink {
    fn emit(&self, event: AuditEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::audit::{AuditContext, AuditEvent, AuditOutcome, AuditSink, InMemoryAuditSink};

    #[test]
    fn completed_event_carries_request_context() {
        let sink = InMemoryAuditSink::default();
        let context = AuditContext::new(Some("conversation-42".to_owned()), "req-123", "webhook");

        sink.emit(
            AuditEvent::validation_completed(&context, "validate_find_hotels_form")
                .with_metadata("prompts", "3"),
        );

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "validation.completed");
        assert_eq!(events[0].outcome, AuditOutcome::Completed);
        assert_eq!(events[0].action, "validate_find_hotels_form");
        assert_eq!(events[0].context.correlation_id, "req-123");
        assert_eq!(events[0].context.sender_id.as_deref(), Some("conversation-42"));
        assert_eq!(events[0].metadata.get("prompts").map(String::as_str), Some("3"));
        assert!(!events[0].event_id.is_empty());
    }

    #[test]
    fn rejected_event_is_marked_rejected() {
        let context = AuditContext::new(None, "req-7", "webhook");

        let event = AuditEvent::validation_rejected(&context, "validate_cruise_form");

        assert_eq!(event.event_type, "validation.rejected");
        assert_eq!(event.outcome, AuditOutcome::Rejected);
        assert_eq!(event.context.sender_id, None);
    }
}
