//! HTTP route handlers consumed by the report-editing frontend.

pub mod excerpts;
pub mod keywords;
pub mod quesitos;
pub mod stats;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(stats::routes())
        .merge(excerpts::routes())
        .merge(quesitos::routes())
        .merge(keywords::routes())
}

/// Map a domain error to a status code and `{ "error": ... }` body.
pub(crate) fn error_response(err: &laudo_core::Error) -> (StatusCode, Json<serde_json::Value>) {
    use laudo_core::Error;

    let status = match err {
        Error::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        Error::ExtractionFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::InvalidCategory(_) | Error::Config(_) => StatusCode::BAD_REQUEST,
        Error::Io(_) | Error::Json(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}
