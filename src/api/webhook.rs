//! Webhook handler for GitLab events

use axum::{
    Json,
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::SharedState;
use crate::utils::{GITLAB_EVENT_UUID_HEADER, GITLAB_TOKEN_HEADER, verify_gitlab_token};
use crate::webhook::{EventKind, translate_event};

fn ok() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

fn failure(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": detail.into() }))).into_response()
}

/// Handles the GitLab webhook POST request.
/// Delivery to Mattermost happens in the background; GitLab only learns
/// whether the event was accepted.
pub async fn handle_gitlab_webhook(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let token = headers
        .get(GITLAB_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    let authorized = token
        .map(|t| verify_gitlab_token(&state.config.webhook_secret, t))
        .unwrap_or(false);
    if !authorized {
        warn!("Rejected webhook with missing or invalid {} header", GITLAB_TOKEN_HEADER);
        return failure(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            info!("Could not parse JSON body: {:?}", e);
            return failure(StatusCode::BAD_REQUEST, "Body is not valid JSON");
        }
    };

    let Some(kind) = EventKind::from_payload(&payload) else {
        info!(
            "Ignoring unsupported event kind {:?}",
            payload.get("object_kind").and_then(|k| k.as_str())
        );
        return ok();
    };

    let delivery_id = headers
        .get(GITLAB_EVENT_UUID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    let message = match translate_event(kind, payload) {
        Ok(Some(message)) => message.branded(&state.config.bot),
        Ok(None) => {
            debug!(%delivery_id, event = %kind, "Event not announced");
            return ok();
        }
        Err(e) => {
            error!(%delivery_id, event = %kind, "Failed to translate event: {}", e);
            return failure(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
        }
    };

    info!(%delivery_id, event = %kind, "Forwarding {} event to Mattermost", kind);

    let shared_state = state.clone();
    let span = info_span!("delivery", %delivery_id, event = %kind);
    tokio::spawn(
        async move {
            match shared_state.mattermost.send(&message).await {
                Ok(()) => info!("Delivered to Mattermost"),
                Err(e) => error!("Delivery to Mattermost failed: {}", e),
            }
        }
        .instrument(span),
    );

    ok()
}
