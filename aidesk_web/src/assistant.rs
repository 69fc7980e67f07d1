use std::sync::Arc;

use axum::{
    body::{Bytes, Full},
    extract::State,
    http::{header, Method, Response, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{
    deepseek::ApiError,
    model::{Action, AssistantReply},
    AppState,
};

/// `POST /api/assistant`. Validation failures about the request itself get
/// 4xx codes; everything past validation is absorbed into a 200-shaped reply
/// so chat front ends can render failures inline.
pub async fn handle_command(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    if body.is_empty() {
        return validation_error(StatusCode::BAD_REQUEST, "Empty request body");
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return validation_error(StatusCode::BAD_REQUEST, "Invalid JSON format"),
    };

    let command = match payload.get("command").and_then(Value::as_str) {
        Some(command) => command.to_owned(),
        None => return validation_error(StatusCode::BAD_REQUEST, "Missing 'command' field"),
    };

    tracing::info!("processing command ({} chars)", command.len());
    let reply = process_command(&state, &command).await;

    (StatusCode::OK, Json(reply)).into_response()
}

/// Runs one command through the upstream chat-completion call and shapes the
/// reply. Never fails: every domain-level problem comes back as a normal
/// reply tagged `action: "error"`.
pub async fn process_command(state: &AppState, command: &str) -> AssistantReply {
    if state.config.api_key.is_empty() {
        return AssistantReply::error("DeepSeek API key not configured");
    }

    match state.api.chat_completion(command).await {
        Ok(content) => shape_reply(command, content),
        Err(ApiError::Timeout) => {
            tracing::warn!("upstream call timed out");
            AssistantReply::error("DeepSeek API timed out. Please try again.")
        }
        Err(e @ (ApiError::Transport(_) | ApiError::Upstream { .. })) => {
            tracing::warn!("upstream call failed: {e}");
            AssistantReply::error(format!("API connection error: {e}"))
        }
        Err(e) => {
            tracing::error!("failed to process command: {e}");
            AssistantReply::error(format!("Processing error: {e}"))
        }
    }
}

fn shape_reply(command: &str, content: String) -> AssistantReply {
    match Action::classify(command) {
        Some(Action::Deploy) => {
            AssistantReply::tagged(format!("🚀 Deployment initiated!\n\n{content}"), Action::Deploy)
        }
        Some(Action::Email) => {
            AssistantReply::tagged(format!("📧 Email draft prepared!\n\n{content}"), Action::Email)
        }
        _ => AssistantReply::plain(content),
    }
}

/// Requests that match no route: OPTIONS is a cors no-op, unknown GETs echo
/// the path, anything else is a miss on the assistant endpoint.
pub async fn fallback(method: Method, uri: Uri) -> impl IntoResponse {
    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::GET => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not found", "path": uri.path() })),
        )
            .into_response(),
        _ => validation_error(StatusCode::NOT_FOUND, "Invalid endpoint"),
    }
}

/// Outermost catch: anything that panics past the validation layer comes
/// back as a 500 instead of tearing down the connection.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response<Full<Bytes>> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("request handler panicked: {details}");

    let body = json!({ "error": format!("Internal server error: {details}") }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .expect("static response parts are valid")
}

fn validation_error(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(json!({ "error": message }))).into_response()
}
