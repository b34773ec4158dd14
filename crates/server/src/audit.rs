use tracing::{info, warn};
use tripdesk_core::audit::{AuditEvent, AuditOutcome, AuditSink};

/// Writes audit events to the structured log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn emit(&self, event: AuditEvent) {
        let metadata = serde_json::to_string(&event.metadata).unwrap_or_default();
        let sender_id = event.context.sender_id.as_deref().unwrap_or("unknown");

        match event.outcome {
            AuditOutcome::Completed => info!(
                event_name = %event.event_type,
                event_id = %event.event_id,
                correlation_id = %event.context.correlation_id,
                sender_id = %sender_id,
                actor = %event.context.actor,
                action_name = %event.action,
                occurred_at = %event.occurred_at.to_rfc3339(),
                metadata = %metadata,
                "audit event"
            ),
            AuditOutcome::Rejected => warn!(
                event_name = %event.event_type,
                event_id = %event.event_id,
                correlation_id = %event.context.correlation_id,
                sender_id = %sender_id,
                actor = %event.context.actor,
                action_name = %event.action,
                occurred_at = %event.occurred_at.to_rfc3339(),
                metadata = %metadata,
                "audit event"
            ),
        }
    }
}
