use super::gateway;
use super::types::{IndexableDocument, IndexedResponse};
use crate::engine::client::EngineClient;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /search/index`
///
/// Unlike the search path, ingestion failures are not swallowed: the engine's
/// rejection is logged and propagated to the caller.
pub async fn handle_index_document(
    Extension(engine): Extension<Arc<EngineClient>>,
    Json(doc): Json<IndexableDocument>,
) -> Result<Json<IndexedResponse>, (StatusCode, String)> {
    match gateway::ingest(&engine, doc).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            tracing::error!("Index error: {}", err);
            Err((StatusCode::BAD_GATEWAY, err.to_string()))
        }
    }
}

/// `DELETE /search/index`
///
/// Drops the entire document collection and returns the engine's raw
/// acknowledgement body.
pub async fn handle_delete_index(
    Extension(engine): Extension<Arc<EngineClient>>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    match engine.delete_index().await {
        Ok(body) => Ok(Json(body)),
        Err(err) => {
            tracing::error!("Delete index error: {}", err);
            Err((StatusCode::BAD_GATEWAY, err.to_string()))
        }
    }
}
