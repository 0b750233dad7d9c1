//! Health and server info routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use laudo_extract::Category;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/server-info", get(get_server_info))
}

/// GET /api/health — liveness plus the category ids the service accepts.
async fn get_health() -> Json<serde_json::Value> {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "categories": categories,
    }))
}

/// GET /api/server-info — effective configuration.
async fn get_server_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "port": state.config.port,
        "keywordsFile": state.config.keywords_file.as_ref().map(|p| p.display().to_string()),
        "maxUploadBytes": state.config.max_upload_bytes,
        "platform": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
    }))
}
