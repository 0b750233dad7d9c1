//! Questionnaire parsing route.

use std::sync::Arc;

use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/quesitos", post(parse_quesitos))
}

#[derive(Debug, Deserialize)]
struct QuesitosRequest {
    text: String,
}

/// POST /api/quesitos — split pasted questionnaire text into numbered items.
async fn parse_quesitos(Json(req): Json<QuesitosRequest>) -> Json<serde_json::Value> {
    let quesitos = laudo_extract::parse_quesitos(&req.text);
    Json(serde_json::json!({
        "total": quesitos.len(),
        "quesitos": quesitos,
    }))
}
