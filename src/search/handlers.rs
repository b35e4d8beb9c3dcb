use super::pagination::clamp_page;
use super::translator::build_search_body;
use super::types::{Hit, SearchParams};
use crate::engine::client::EngineClient;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /search?q=<text>&from=<offset>&size=<limit>`
///
/// Engine failures are swallowed at this boundary: they are logged and the
/// caller gets an empty result list, never an HTTP error. The UI shows
/// "no results" instead of an error banner.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(engine): Extension<Arc<EngineClient>>,
) -> Json<Vec<Hit>> {
    let page = clamp_page(params.from.as_deref(), params.size.as_deref());
    let body = build_search_body(params.q.as_deref().unwrap_or(""), page);

    match engine.search(&body).await {
        Ok(hits) => Json(hits),
        Err(err) => {
            tracing::error!("Search error: {}", err);
            Json(Vec::new())
        }
    }
}
