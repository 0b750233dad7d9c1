//! Excerpt extraction routes — raw text and file upload.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use laudo_extract::{Category, ExcerptExtractor};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/excerpts", post(extract_from_text))
        .route("/excerpts/upload", post(extract_from_upload))
}

#[derive(Debug, Deserialize)]
struct ExcerptRequest {
    text: String,
    #[serde(default)]
    categories: Vec<String>,
}

/// POST /api/excerpts — classify already-decoded text.
async fn extract_from_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExcerptRequest>,
) -> impl IntoResponse {
    let categories = match parse_categories(req.categories.iter().map(String::as_str)) {
        Ok(c) => c,
        Err(e) => return error_response(&e),
    };

    let extractor = state.extractor();
    (
        StatusCode::OK,
        Json(excerpt_body(&extractor, &req.text, &categories)),
    )
}

/// POST /api/excerpts/upload — multipart `file` plus optional `categories`
/// (comma-separated ids; all categories when absent).
async fn extract_from_upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut category_field: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    e.status(),
                    Json(serde_json::json!({ "error": e.body_text() })),
                )
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(bytes) => upload = Some((filename, bytes.to_vec())),
                    Err(e) => {
                        warn!("Upload read failed for {}: {}", filename, e);
                        return (
                            e.status(),
                            Json(serde_json::json!({ "error": e.body_text() })),
                        );
                    }
                }
            }
            Some("categories") => match field.text().await {
                Ok(text) => category_field = Some(text),
                Err(e) => {
                    return (
                        e.status(),
                        Json(serde_json::json!({ "error": e.body_text() })),
                    )
                }
            },
            _ => continue,
        }
    }

    let Some((filename, data)) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "missing file field" })),
        );
    };

    if data.len() > state.config.max_upload_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(serde_json::json!({ "error": "file exceeds upload limit" })),
        );
    }

    let categories = match category_field.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            match parse_categories(raw.split(',').filter(|s| !s.trim().is_empty())) {
                Ok(c) => c,
                Err(e) => return error_response(&e),
            }
        }
        _ => Category::ALL.to_vec(),
    };

    let extractor = state.extractor();
    let digest = hex::encode(Sha256::digest(&data));
    let result = tokio::task::spawn_blocking(move || {
        laudo_extract::extract_text(&filename, &data).map(|text| {
            let mut body = excerpt_body(&extractor, &text, &categories);
            body["filename"] = serde_json::json!(filename);
            body
        })
    })
    .await;

    match result {
        Ok(Ok(mut body)) => {
            info!(
                "Extracted excerpts from upload sha256={} found={}",
                digest, body["found"]
            );
            body["sha256"] = serde_json::json!(digest);
            (StatusCode::OK, Json(body))
        }
        Ok(Err(e)) => {
            warn!("Upload sha256={} rejected: {}", digest, e);
            error_response(&e)
        }
        Err(e) => error_response(&laudo_core::Error::Internal(format!(
            "extraction task failed: {}",
            e
        ))),
    }
}

fn parse_categories<'a, I>(ids: I) -> laudo_core::Result<Vec<Category>>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().map(|id| id.parse()).collect()
}

/// Response body shared by both routes.
fn excerpt_body(
    extractor: &ExcerptExtractor,
    text: &str,
    categories: &[Category],
) -> serde_json::Value {
    let results = extractor.classify(text, categories);
    let block = laudo_extract::excerpts::format::format_block(&results);

    serde_json::json!({
        "text": block,
        "found": !block.is_empty(),
        "results": results,
    })
}
