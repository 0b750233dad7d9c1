//! Keyword table inspection and reload.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use laudo_extract::Category;
use tracing::warn;

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/keywords/reload", post(reload_keywords))
}

/// GET /api/categories — active keyword tables per category.
async fn list_categories(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let extractor = state.extractor();
    let tables = extractor.tables();

    let categories: Vec<serde_json::Value> = Category::ALL
        .iter()
        .map(|c| {
            let set = tables.for_category(*c);
            serde_json::json!({
                "id": c.id(),
                "label": c.label(),
                "required": set.required,
                "excluded": set.excluded,
            })
        })
        .collect();

    Json(serde_json::json!({
        "categories": categories,
        "globalExcluded": tables.global_excluded,
    }))
}

/// POST /api/keywords/reload — re-read the configured keyword file.
async fn reload_keywords(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.reload_tables() {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "reloaded": true })),
        ),
        Err(e) => {
            warn!("Keyword reload failed: {}", e);
            error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use laudo_core::LaudoConfig;

    use crate::routes::test_support::{default_state, get, post_json, send};
    use crate::state::AppState;

    #[tokio::test]
    async fn test_list_categories() {
        let (status, body) = send(default_state(), get("/api/categories")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"].as_array().unwrap().len(), 3);
        assert_eq!(body["categories"][0]["label"], "insalubridade");
        assert!(body["globalExcluded"]
            .as_array()
            .unwrap()
            .iter()
            .any(|k| k == "valor da causa"));
    }

    #[tokio::test]
    async fn test_reload_without_file() {
        let (status, body) = send(
            default_state(),
            post_json("/api/keywords/reload", serde_json::json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("keywords file"));
    }

    #[tokio::test]
    async fn test_reload_swaps_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "insalubrity": {{ "required": ["benzeno"] }} }}"#).unwrap();

        let config = LaudoConfig {
            keywords_file: Some(file.path().to_path_buf()),
            ..LaudoConfig::default()
        };
        let state = Arc::new(AppState::with_tables(
            config,
            laudo_extract::KeywordTables::default(),
        ));

        let (status, _) = send(
            state.clone(),
            post_json("/api/keywords/reload", serde_json::json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            state.extractor().tables().insalubrity.required,
            vec!["benzeno".to_string()]
        );

        // A broken file leaves the last good tables in place.
        std::fs::write(file.path(), "{ broken").unwrap();
        let (status, _) = send(
            state.clone(),
            post_json("/api/keywords/reload", serde_json::json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            state.extractor().tables().insalubrity.required,
            vec!["benzeno".to_string()]
        );
    }
}
