use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub mod assistant;
pub mod config;
pub mod deepseek;
pub mod logging;
pub mod model;
pub mod statics;

pub use config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub api: deepseek::DeepSeekClient,
}

/// Builds the full service router from an explicit config so tests can
/// inject their own credentials, upstream url and timeouts.
pub fn app(config: AppConfig) -> anyhow::Result<Router> {
    let api = deepseek::DeepSeekClient::new(&config)?;
    let state = Arc::new(AppState { config, api });

    // Method mismatches on known paths get the same 404 shapes as unknown
    // paths, so the fallback is attached per method router as well.
    let router = Router::new()
        .route(
            "/api/assistant",
            post(assistant::handle_command)
                .options(preflight)
                .fallback(assistant::fallback),
        )
        .route(
            "/api/health",
            get(statics::health)
                .options(preflight)
                .fallback(assistant::fallback),
        )
        .route(
            "/style.css",
            get(statics::style_css)
                .options(preflight)
                .fallback(assistant::fallback),
        )
        .route(
            "/script.js",
            get(statics::script_js)
                .options(preflight)
                .fallback(assistant::fallback),
        )
        .fallback(assistant::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(assistant::handle_panic))
        // Outermost so panic responses still carry the cors headers.
        .layer(cors_layer())
        .with_state(state);

    Ok(router)
}

// Preflight requests get an empty 200; the cors layer appends the headers.
async fn preflight() {}

/// Permissive cors: any origin, the three methods the service answers, and
/// the content-type header. Applied outermost so every response carries it.
pub fn cors_layer() -> CorsLayer {
    use axum::http::{header, Method};
    use tower_http::cors::Any;

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
