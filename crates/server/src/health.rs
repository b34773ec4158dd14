use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tripdesk_core::registry::ValidatorRegistry;

#[derive(Clone)]
pub struct HealthState {
    registry: Arc<ValidatorRegistry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub validators: HealthCheck,
    pub actions: Vec<&'static str>,
    pub checked_at: String,
}

pub fn router(registry: Arc<ValidatorRegistry>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { registry })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let validators = validator_check(&state.registry);
    let ready = validators.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "tripdesk action server initialized".to_string(),
        },
        validators,
        actions: state.registry.names(),
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn validator_check(registry: &ValidatorRegistry) -> HealthCheck {
    if registry.is_empty() {
        HealthCheck { status: "degraded", detail: "no form validators registered".to_string() }
    } else {
        HealthCheck {
            status: "ready",
            detail: format!("{} form validators registered", registry.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use tripdesk_core::forms::{self, flights};
    use tripdesk_core::registry::ValidatorRegistry;

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_returns_ready_when_validators_are_registered() {
        let registry = Arc::new(ValidatorRegistry::with_defaults());

        let (status, Json(payload)) = health(State(HealthState { registry })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.validators.status, "ready");
        assert_eq!(payload.actions.len(), forms::ACTION_NAMES.len());
        assert!(payload.actions.contains(&flights::ACTION_NAME));
    }

    #[tokio::test]
    async fn health_returns_service_unavailable_without_validators() {
        let registry = ValidatorRegistry::with_defaults().without(forms::ACTION_NAMES);
        let registry = Arc::new(registry);

        let (status, Json(payload)) = health(State(HealthState { registry })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.validators.status, "degraded");
        assert_eq!(payload.service.status, "ready");
        assert!(payload.actions.is_empty());
    }
}
