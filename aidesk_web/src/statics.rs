use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::AppState;

pub async fn health() -> impl IntoResponse {
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();

    Json(json!({ "status": "ok", "time": time }))
}

pub async fn style_css(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    serve_asset(&state, "style.css", "text/css; charset=utf-8")
}

pub async fn script_js(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    serve_asset(&state, "script.js", "application/javascript; charset=utf-8")
}

// Read from disk per request so asset edits show up without a restart.
fn serve_asset(state: &AppState, name: &str, content_type: &'static str) -> axum::response::Response {
    match std::fs::read_to_string(state.config.public_dir.join(name)) {
        Ok(contents) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type)],
            contents,
        )
            .into_response(),
        Err(err) => {
            tracing::warn!("failed to read asset {name}: {err}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Not found", "path": format!("/{name}") })),
            )
                .into_response()
        }
    }
}
