//! Axum router configuration with middleware.
//!
//! Routes sit at the root to match the chat page's fetch calls.
//! Middleware: CORS (permissive), request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::page::chat_page))
        .route("/new_session", post(handlers::session::new_session))
        .route("/ask", post(handlers::ask::ask))
        .route(
            "/get_history/{session_id}",
            get(handlers::session::get_history),
        )
        .route("/faqs", get(handlers::faq::list_faqs))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
