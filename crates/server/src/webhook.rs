use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{info, warn};
use tripdesk_core::audit::{AuditContext, AuditSink};
use tripdesk_core::errors::{ApplicationError, InterfaceError};
use tripdesk_core::protocol::{ActionCall, ActionError, ActionInfo, ActionResponse};
use tripdesk_core::registry::ValidatorRegistry;
use uuid::Uuid;

#[derive(Clone)]
pub struct ActionState {
    pub registry: Arc<ValidatorRegistry>,
    pub audit_sink: Arc<dyn AuditSink>,
    pub auth_token: Option<SecretString>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookQuery {
    pub token: Option<String>,
}

type ActionRejection = (StatusCode, Json<ActionError>);

pub fn router(state: ActionState) -> Router {
    Router::new()
        .route("/webhook", post(run_action))
        .route("/actions", get(list_actions))
        .with_state(state)
}

pub async fn run_action(
    State(state): State<ActionState>,
    Query(query): Query<WebhookQuery>,
    payload: Result<Json<ActionCall>, JsonRejection>,
) -> Result<Json<ActionResponse>, ActionRejection> {
    let correlation_id = Uuid::new_v4().to_string();

    let Json(call) = payload.map_err(|rejection| {
        reject(
            ApplicationError::MalformedRequest(rejection.body_text()),
            None,
            &correlation_id,
        )
    })?;

    authorize(state.auth_token.as_ref(), query.token.as_deref())
        .map_err(|error| reject(error, Some(call.next_action.as_str()), &correlation_id))?;

    let audit = AuditContext::new(
        call.conversation_id().map(ToOwned::to_owned),
        correlation_id.clone(),
        "action-server",
    );
    let snapshot = call.tracker.snapshot();
    let outcome = state
        .registry
        .run_with_audit(&call.next_action, &snapshot, state.audit_sink.as_ref(), &audit)
        .map_err(|error| reject(error, Some(call.next_action.as_str()), &correlation_id))?;

    info!(
        event_name = "action.validation.completed",
        correlation_id = %correlation_id,
        sender_id = call.conversation_id().unwrap_or("unknown"),
        action_name = %call.next_action,
        slot_events = outcome.changes.len(),
        prompts = outcome.prompts.len(),
        "form validation completed"
    );

    Ok(Json(ActionResponse::from(&outcome)))
}

pub async fn list_actions(State(state): State<ActionState>) -> Json<Vec<ActionInfo>> {
    let actions =
        state.registry.names().into_iter().map(|name| ActionInfo { name: name.to_owned() });
    Json(actions.collect())
}

fn authorize(
    expected: Option<&SecretString>,
    supplied: Option<&str>,
) -> Result<(), ApplicationError> {
    match expected {
        None => Ok(()),
        Some(expected) if supplied == Some(expected.expose_secret()) => Ok(()),
        Some(_) => Err(ApplicationError::Unauthorized),
    }
}

fn reject(
    error: ApplicationError,
    action_name: Option<&str>,
    correlation_id: &str,
) -> ActionRejection {
    let message = error.to_string();
    let interface = error.into_interface(correlation_id);
    let status = match &interface {
        InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
    };

    warn!(
        event_name = "action.request.rejected",
        correlation_id = %interface.correlation_id(),
        action_name = action_name.unwrap_or("unknown"),
        status = status.as_u16(),
        error = %message,
        "action request rejected"
    );

    let body = ActionError { error: message, action_name: action_name.map(ToOwned::to_owned) };
    (status, Json(body))
}
